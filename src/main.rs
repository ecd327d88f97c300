//! iconset command line interface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use iconset::{IconCreator, IconsetConfig, PlatformToggle};

/// Generate Android and iOS launcher icons from a single image
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate icon sets for the project's native platforms
    #[command(visible_aliases = ["generate", "gerar"])]
    Create(CreateArgs),
}

#[derive(Args, Debug)]
struct CreateArgs {
    /// Source image, ideally square and at least 1024x1024
    image: Option<PathBuf>,

    /// Generate icons without pointing the native projects at them
    #[arg(short = 'd', long)]
    disable_launcher_icon: bool,

    /// Generate Android icons, optionally under a custom resource name
    #[arg(short = 'A', long, value_name = "NAME", num_args = 0..=1)]
    android: Option<Option<String>>,

    /// Source image for Android only
    #[arg(long, value_name = "PATH")]
    image_path_android: Option<PathBuf>,

    /// Android source set / iOS catalog suffix
    #[arg(long)]
    flavor: Option<String>,

    /// Adaptive icon background: a #RRGGBB color or an image path
    #[arg(short = 'b', long, value_name = "COLOR|PATH")]
    adaptive_icon_background: Option<String>,

    /// Adaptive icon foreground image
    #[arg(short = 'f', long, value_name = "PATH")]
    adaptive_icon_foreground: Option<PathBuf>,

    /// Generate iOS icons, optionally under a custom icon set name
    #[arg(short = 'I', long, value_name = "NAME", num_args = 0..=1)]
    ios: Option<Option<String>>,

    /// iOS project folder name, when it differs from app.json's name
    #[arg(long)]
    group: Option<String>,

    /// Source image for iOS only
    #[arg(long, value_name = "PATH")]
    image_path_ios: Option<PathBuf>,

    /// Project root, defaults to the current directory
    #[arg(short = 'C', long, value_name = "DIR")]
    project: Option<PathBuf>,

    /// Log every written file
    #[arg(short, long)]
    verbose: bool,
}

fn toggle(flag: Option<Option<String>>) -> Option<PlatformToggle> {
    flag.map(|name| match name {
        Some(name) => PlatformToggle::Named(name),
        None => PlatformToggle::Enabled(true),
    })
}

impl CreateArgs {
    fn overrides(&self) -> IconsetConfig {
        IconsetConfig {
            image_path: self.image.clone(),
            image_path_android: self.image_path_android.clone(),
            image_path_ios: self.image_path_ios.clone(),
            android: toggle(self.android.clone()),
            ios: toggle(self.ios.clone()),
            flavor: self.flavor.clone(),
            group: self.group.clone(),
            adaptive_icon_background: self.adaptive_icon_background.clone(),
            adaptive_icon_foreground: self.adaptive_icon_foreground.clone(),
            disable_launcher_icon: self.disable_launcher_icon.then_some(true),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let Cli {
        command: Command::Create(args),
    } = Cli::parse();

    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    fmt().with_env_filter(filter).with_target(false).compact().init();

    let context = match &args.project {
        Some(dir) => std::path::absolute(dir)?,
        None => std::env::current_dir()?,
    };
    info!("Generating icons for project at {}", context.display());

    let creator = IconCreator::for_project(&context, args.overrides())?;
    let failed: Vec<_> = creator
        .run()
        .await
        .into_iter()
        .filter(|report| !report.is_success())
        .map(|report| report.platform.to_string())
        .collect();

    if !failed.is_empty() {
        anyhow::bail!("icon generation failed for {}", failed.join(", "));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_args(argv: &[&str]) -> CreateArgs {
        let Cli {
            command: Command::Create(args),
        } = Cli::try_parse_from(argv).unwrap();
        args
    }

    #[test]
    fn create_is_reachable_through_every_alias() {
        for command in ["create", "generate", "gerar"] {
            let args = create_args(&["iconset", command, "icon.png"]);
            assert_eq!(args.image, Some(PathBuf::from("icon.png")));
        }
    }

    #[test]
    fn platform_flags_accept_optional_names() {
        let args = create_args(&["iconset", "gerar", "-A", "--ios", "BetaIcon"]);
        let overrides = args.overrides();
        assert_eq!(overrides.android, Some(PlatformToggle::Enabled(true)));
        assert_eq!(overrides.ios, Some(PlatformToggle::Named("BetaIcon".into())));
        assert_eq!(overrides.disable_launcher_icon, None);
    }
}
