use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use glam::{Vec2, Vec3};
use tracing_subscriber::EnvFilter;
use voxedit_author::{DefaultFilename, Editor, EditorConfig, apply_material};
use voxedit_common::Axis;
use voxedit_input::{FrameInput, FrameTiming};
use voxedit_persist::{DEMO_CUBE_POSITION, export_scene, import_scene};
use voxedit_render::{DebugTextRenderer, Projection, RenderView, Renderer};
use voxedit_scene::Scene;
use voxedit_tools::{ObjectList, SceneInspector};

#[derive(Parser)]
#[command(name = "voxedit-cli", about = "CLI tool for voxel scene files")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Editor configuration file (JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Write a new scene with a row of demo cubes
    New {
        /// Output file [default: <scene dir>/<default file>]
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Number of cubes
        #[arg(short = 'n', long, default_value = "1")]
        cubes: usize,
    },
    /// Load a scene file and print it
    Inspect {
        file: PathBuf,
        /// Print a JSON summary instead of the text listing
        #[arg(long)]
        json: bool,
    },
    /// Set the color of every entity, using material editor rules
    Recolor {
        file: PathBuf,
        #[arg(short, default_value = "")]
        r: String,
        #[arg(short, default_value = "")]
        g: String,
        #[arg(short, default_value = "")]
        b: String,
        #[arg(short, default_value = "")]
        a: String,
        /// Write here instead of overwriting the input
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Drag every entity along one axis, as if with the cursor at (x, y)
    Drag {
        file: PathBuf,
        #[arg(long, value_enum)]
        axis: AxisArg,
        /// Cursor x in viewport pixels
        #[arg(short)]
        x: f32,
        /// Cursor y in viewport pixels
        #[arg(short)]
        y: f32,
        /// Drag clones and keep the originals in place
        #[arg(long)]
        clone: bool,
        /// Write here instead of overwriting the input
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum AxisArg {
    X,
    Y,
    Z,
}

impl From<AxisArg> for Axis {
    fn from(axis: AxisArg) -> Self {
        match axis {
            AxisArg::X => Axis::X,
            AxisArg::Y => Axis::Y,
            AxisArg::Z => Axis::Z,
        }
    }
}

fn load(path: &Path) -> anyhow::Result<Scene> {
    let mut scene = Scene::new();
    import_scene(&mut scene, path).with_context(|| format!("loading {}", path.display()))?;
    Ok(scene)
}

fn save(scene: &Scene, path: &Path) -> anyhow::Result<()> {
    let count =
        export_scene(scene, path).with_context(|| format!("writing {}", path.display()))?;
    println!("Wrote {count} entities to {}", path.display());
    Ok(())
}

fn select_all(scene: &mut Scene) {
    for id in SceneInspector::list_entities(scene) {
        scene.set_selected(id, true);
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let config = match &cli.config {
        Some(path) => EditorConfig::load(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => EditorConfig::default(),
    };

    match cli.command {
        Commands::Info => {
            println!("voxedit-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("common: {}", voxedit_common::crate_info());
            println!("scene: {}", voxedit_scene::crate_info());
            println!("persist: {}", voxedit_persist::crate_info());
            println!("input: {}", voxedit_input::crate_info());
            println!("author: {}", voxedit_author::crate_info());
            println!("render: {}", voxedit_render::crate_info());
            println!("tools: {}", voxedit_tools::crate_info());
            println!("scene dir: {}", config.scene_dir.display());
        }
        Commands::New { out, cubes } => {
            let out = out.unwrap_or_else(|| config.default_scene_path());
            let mut scene = Scene::new();
            for i in 0..cubes {
                let offset = Vec3::new(i as f32 * 2.0 * config.grid_size, 0.0, 0.0);
                scene.add_cube(DEMO_CUBE_POSITION + offset, Vec3::ZERO);
            }
            save(&scene, &out)?;
        }
        Commands::Inspect { file, json } => {
            let scene = load(&file)?;
            if json {
                let entities: Vec<_> = SceneInspector::list_entities(&scene)
                    .into_iter()
                    .filter_map(|id| SceneInspector::inspect_entity(&scene, id))
                    .collect();
                let doc = serde_json::json!({
                    "summary": SceneInspector::summary(&scene),
                    "entities": entities,
                });
                println!("{}", serde_json::to_string_pretty(&doc)?);
            } else {
                let projection = Projection::for_viewport(config.viewport.x, config.viewport.y);
                let view = RenderView::from_camera(scene.camera(), projection);
                print!("{}", DebugTextRenderer::new().render(&scene, &view));
                let list = ObjectList::new(&scene);
                let labels: Vec<_> = list.entries().iter().map(|e| e.label.as_str()).collect();
                println!("Objects: {}", labels.join(", "));
            }
        }
        Commands::Recolor {
            file,
            r,
            g,
            b,
            a,
            out,
        } => {
            let mut scene = load(&file)?;
            select_all(&mut scene);
            let count = apply_material(&mut scene, [r.as_str(), g.as_str(), b.as_str(), a.as_str()])?;
            scene.clear_selection();
            println!("Recolored {count} entities");
            save(&scene, out.as_deref().unwrap_or(&file))?;
        }
        Commands::Drag {
            file,
            axis,
            x,
            y,
            clone,
            out,
        } => {
            let mut scene = load(&file)?;
            select_all(&mut scene);

            let mut editor = Editor::new(config);
            let timing = FrameTiming::new(editor.config().target_frame_ms);
            let cursor = Vec2::new(x, y);

            let mut enter = FrameInput::at_cursor(cursor);
            enter.begin_move = !clone;
            enter.clone_move = clone;
            editor.apply_input(&mut scene, &enter, &timing, &mut DefaultFilename);

            let mut pick = FrameInput::at_cursor(cursor);
            match Axis::from(axis) {
                Axis::X => pick.axis_x = true,
                Axis::Y => pick.axis_y = true,
                Axis::Z => pick.axis_z = true,
            }
            editor.apply_input(&mut scene, &pick, &timing, &mut DefaultFilename);

            for event in editor.drain_events() {
                tracing::info!(?event, "editor");
            }
            println!("{}", SceneInspector::summary(&scene));
            scene.clear_selection();
            save(&scene, out.as_deref().unwrap_or(&file))?;
        }
    }

    Ok(())
}
