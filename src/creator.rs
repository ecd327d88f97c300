//! Run orchestration: decides which platforms run and drives their generators.

use std::path::Path;

use tracing::{error, info};

use crate::android::AndroidGenerator;
use crate::config::IconsetConfig;
use crate::error::Result;
use crate::ios::IosGenerator;
use crate::options::{GenerationOptions, Platform};
use crate::paths::ProjectPaths;

/// Outcome of one platform branch.
#[derive(Debug)]
pub struct PlatformReport {
    pub platform: Platform,
    pub result: Result<()>,
}

impl PlatformReport {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Generates icon sets for every enabled platform of one project.
#[derive(Debug, Clone)]
pub struct IconCreator {
    options: GenerationOptions,
    paths: ProjectPaths,
}

impl IconCreator {
    pub fn new(options: GenerationOptions) -> Self {
        let paths = ProjectPaths::new(&options.context);
        Self { options, paths }
    }

    /// Discovers the project's settings, applies `overrides` on top and
    /// resolves them into run options.
    pub fn for_project(context: &Path, overrides: IconsetConfig) -> Result<Self> {
        let config = IconsetConfig::resolve(context, overrides)?;
        Ok(Self::new(GenerationOptions::resolve(config, context)))
    }

    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    /// Runs the enabled platforms concurrently.
    ///
    /// A failure in one platform never cancels the other; each outcome is
    /// reported separately, Android first.
    pub async fn run(&self) -> Vec<PlatformReport> {
        let android = async {
            if self.options.is_enabled(Platform::Android) {
                Some(self.report(Platform::Android, self.run_android().await))
            } else {
                None
            }
        };
        let ios = async {
            if self.options.is_enabled(Platform::Ios) {
                Some(self.report(Platform::Ios, self.run_ios().await))
            } else {
                None
            }
        };

        let (android, ios) = tokio::join!(android, ios);
        android.into_iter().chain(ios).collect()
    }

    fn report(&self, platform: Platform, result: Result<()>) -> PlatformReport {
        match &result {
            Ok(()) => info!("{platform} icons generated successfully"),
            Err(err) if err.is_configuration() => {
                error!("{platform} icon generation skipped, configuration error: {err}")
            }
            Err(err) => error!("{platform} icon generation failed: {err}"),
        }
        PlatformReport { platform, result }
    }

    async fn run_android(&self) -> Result<()> {
        info!("Generating icons for Android...");

        let image_path = self.options.image_for(Platform::Android)?;
        let generator = AndroidGenerator::new(self.paths.clone(), &self.options)?;

        generator.create_android_icons(image_path).await?;

        if let (Some(background), Some(foreground)) = (
            self.options.adaptive_background.as_deref(),
            self.options.adaptive_foreground.as_deref(),
        ) {
            generator
                .create_adaptive_icons(background, foreground)
                .await?;
        }
        Ok(())
    }

    async fn run_ios(&self) -> Result<()> {
        info!("Generating icons for iOS...");

        let image_path = self.options.image_for(Platform::Ios)?;
        IosGenerator::new(self.paths.clone(), &self.options)
            .create_ios_icons(image_path)
            .await
    }
}
