use std::error::Error;

use clap::Parser;
use viewkit_app_shell::{AppShell, HeadlessSceneRenderer, ShellConfig};
use viewkit_ui::{format_layout_tree, format_render_scene};

mod catalog;
mod views;

use catalog::ViewCatalog;

/// Renders one demonstration view headlessly and prints what was drawn.
#[derive(Parser, Debug)]
#[command(name = "views-gallery", version, about)]
struct Args {
    /// View to render
    #[arg(short, long, default_value = "capsule-text")]
    view: String,

    /// List the available views and exit
    #[arg(short, long)]
    list: bool,

    #[arg(long, default_value_t = 800.0)]
    width: f32,

    #[arg(long, default_value_t = 600.0)]
    height: f32,

    /// Press the button with this label (repeatable)
    #[arg(short, long = "press", value_name = "LABEL")]
    presses: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();
    let catalog = ViewCatalog::gallery();

    if args.list {
        for (name, entry) in catalog.iter() {
            println!("{name:<24} {}", entry.summary);
        }
        return Ok(());
    }

    let Some(entry) = catalog.get(&args.view) else {
        return Err(format!("unknown view {:?}; try --list", args.view).into());
    };

    let config = ShellConfig::new().viewport(args.width, args.height);
    let build = entry.build;
    let mut shell = AppShell::with_config(HeadlessSceneRenderer::new(), config, build);

    for label in &args.presses {
        shell.press(label)?;
        log::info!("pressed {label:?}, render passes: {}", shell.render_count());
    }

    println!("=== {} ===", args.view);
    if let Some(tree) = shell.layout() {
        print!("{}", format_layout_tree(tree));
    }
    println!("--- scene ---");
    print!("{}", format_render_scene(shell.scene()));
    shell.log_debug_info();
    Ok(())
}
