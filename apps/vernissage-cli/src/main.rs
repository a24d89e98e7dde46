use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use glam::Vec2;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use vernissage_camera::CameraConfig;
use vernissage_catalog::{Catalog, FilterState, SortOption, StyleFilter};
use vernissage_input::{InputEvent, KeyCode};
use vernissage_scene::{CONTROLS_HINT, DebugTextRenderer, ViewerSession};
use vernissage_texture::{TextureCache, TextureStyle};

#[derive(Parser)]
#[command(name = "vernissage-cli", about = "CLI tool for the virtual gallery core")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print crate versions and the known texture styles
    Info,
    /// Render procedural textures to PNG files
    Textures {
        /// Output directory
        #[arg(short, long)]
        out: PathBuf,
        /// Texture key to export; repeatable. Defaults to every style.
        #[arg(short, long = "key")]
        keys: Vec<String>,
    },
    /// Search, filter and sort the gallery catalog
    Explore {
        /// Case-insensitive text to look for
        #[arg(long, default_value = "")]
        search: String,
        /// Gallery style, or "all"
        #[arg(long, default_value = "all")]
        style: StyleFilter,
        /// trending, newest, most-viewed or most-liked
        #[arg(long, default_value = "trending")]
        sort: SortOption,
        /// Catalog JSON file instead of the built-in one
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Script a walkthrough of one gallery and print the last frame
    Walk {
        /// Gallery id
        #[arg(short, long)]
        gallery: String,
        /// Seconds to hold the forward key
        #[arg(long, default_value = "0")]
        forward: f32,
        /// Horizontal drag in pixels before walking
        #[arg(long, default_value = "0")]
        drag_x: f32,
        /// Vertical drag in pixels before walking
        #[arg(long, default_value = "0")]
        drag_y: f32,
        /// Simulated frames per second
        #[arg(long, default_value = "60")]
        fps: u32,
        /// Camera config YAML
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("vernissage-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("common: {}", vernissage_common::crate_info());
            println!("input: {}", vernissage_input::crate_info());
            println!("camera: {}", vernissage_camera::crate_info());
            println!("texture: {}", vernissage_texture::crate_info());
            println!("catalog: {}", vernissage_catalog::crate_info());
            println!("scene: {}", vernissage_scene::crate_info());
            println!("texture styles:");
            for style in TextureStyle::ALL {
                println!("  {style}");
            }
        }
        Commands::Textures { out, keys } => {
            let keys = if keys.is_empty() {
                TextureStyle::ALL.iter().map(|s| s.key().to_string()).collect()
            } else {
                keys
            };
            std::fs::create_dir_all(&out)
                .with_context(|| format!("creating {}", out.display()))?;

            for key in &keys {
                let path = out.join(png_file_name(key)?);
                let texture = vernissage_texture::art_texture(key);
                texture
                    .save_png(&path)
                    .with_context(|| format!("writing {}", path.display()))?;
                println!(
                    "{key:<20} {}x{} {}{} -> {}",
                    texture.width(),
                    texture.height(),
                    texture.digest(),
                    if texture.is_fallback() { " (fallback)" } else { "" },
                    path.display()
                );
            }
            tracing::info!(count = keys.len(), out = %out.display(), "textures exported");
        }
        Commands::Explore {
            search,
            style,
            sort,
            catalog,
        } => {
            let catalog = match catalog {
                Some(path) => Catalog::load(&path)
                    .with_context(|| format!("loading catalog {}", path.display()))?,
                None => Catalog::builtin()?,
            };
            let query = FilterState {
                search,
                style,
                sort,
            };
            let results = catalog.explore(&query);
            println!("{} of {} galleries, sorted by {}", results.len(), catalog.len(), query.sort);
            for g in results {
                println!(
                    "  {:<26} {:<22} {:<18} {:<10} views={:<7} likes={:<6} works={}{}",
                    g.id,
                    g.title,
                    g.artist.name,
                    g.style,
                    g.views,
                    g.likes,
                    g.artworks.len(),
                    if g.featured { " featured" } else { "" }
                );
            }
        }
        Commands::Walk {
            gallery,
            forward,
            drag_x,
            drag_y,
            fps,
            config,
        } => {
            if fps == 0 {
                bail!("--fps must be positive");
            }
            let config = match config {
                Some(path) => CameraConfig::load(&path)
                    .with_context(|| format!("loading camera config {}", path.display()))?,
                None => CameraConfig::default(),
            };
            let catalog = Catalog::builtin()?;
            let gallery = catalog
                .find(&gallery)
                .with_context(|| format!("no gallery with id {gallery:?}"))?;

            tracing::info!(gallery = %gallery.id, forward, fps, "starting walkthrough");
            let mut textures = TextureCache::new();
            let mut session = ViewerSession::mount(gallery, config, &mut textures);
            let delta = 1.0 / fps as f32;

            if drag_x != 0.0 || drag_y != 0.0 {
                let start = Vec2::new(640.0, 360.0);
                session.handle_input(InputEvent::PointerDown { position: start });
                session.handle_input(InputEvent::PointerMove {
                    position: start + Vec2::new(drag_x, drag_y),
                });
                session.handle_input(InputEvent::PointerUp);
                session.frame(delta);
            }

            let steps = (forward.max(0.0) * fps as f32).round() as u32;
            session.handle_input(InputEvent::KeyDown(KeyCode::KeyW));
            for _ in 0..steps {
                session.frame(delta);
            }
            session.handle_input(InputEvent::KeyUp(KeyCode::KeyW));
            session.frame(delta);

            print!("{}", session.render(&DebugTextRenderer::new()));
            println!("frames={} elapsed={:.2}s", session.frames(), session.elapsed());
            if session.controls_hint_visible() {
                println!("hint: {CONTROLS_HINT}");
            }
            let stats = textures.stats();
            println!("textures: hits={} misses={}", stats.hits, stats.misses);
        }
    }

    Ok(())
}

/// PNG file name for a texture key. Keys that could leave the output
/// directory are rejected.
fn png_file_name(key: &str) -> anyhow::Result<String> {
    if key.is_empty() || key == "." || key == ".." || key.contains(['/', '\\']) {
        bail!("texture key {key:?} is not a valid file name");
    }
    Ok(format!("{key}.png"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use vernissage_catalog::GalleryStyle;

    #[test]
    fn png_names_for_plain_keys() {
        assert_eq!(png_file_name("night-city").unwrap(), "night-city.png");
        assert_eq!(png_file_name("no-such-style").unwrap(), "no-such-style.png");
    }

    #[test]
    fn png_names_reject_path_like_keys() {
        for key in ["", ".", "..", "../escape", "a/b", "a\\b"] {
            assert!(png_file_name(key).is_err(), "{key:?}");
        }
    }

    #[test]
    fn cli_parses_explore_filters() {
        let cli = Cli::try_parse_from([
            "vernissage-cli",
            "explore",
            "--style",
            "surreal",
            "--sort",
            "newest",
        ])
        .unwrap();
        match cli.command {
            Commands::Explore { style, sort, .. } => {
                assert_eq!(style, StyleFilter::Only(GalleryStyle::Surreal));
                assert_eq!(sort, SortOption::Newest);
            }
            _ => panic!("expected explore"),
        }
    }
}
