//giant-tree/src/main.rs
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::{env, fs};

use giant_tree::kernel::{DispatchResult, Store};
use giant_tree::models::Workspace;
use giant_tree::script::parse_line;
use giant_tree::settings;

mod logging;

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();
    let Some(workspace_path) = args.get(1) else {
        eprintln!("usage: giant-tree <workspace.json> [script]");
        std::process::exit(2);
    };

    let settings = settings::load_settings().unwrap_or_default();
    let _logging = logging::init(settings.log_filter.as_deref());
    if let Err(error) = settings::ensure_settings_file() {
        tracing::warn!(error = %error, "cannot write default settings");
    }

    let data = fs::read_to_string(workspace_path)?;
    let workspace = Workspace::from_json(&data).map_err(io::Error::other)?;
    tracing::info!(
        workspace = %workspace.id(),
        entries = workspace.tree.len(),
        "workspace loaded"
    );

    let mut store = Store::new(workspace, &settings);

    let input: Box<dyn BufRead> = match args.get(2) {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(io::stdin().lock()),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_tree(&mut out, &store)?;

    for (line_no, line) in input.lines().enumerate() {
        let line = line?;
        match parse_line(&line) {
            Ok(Some(action)) => {
                writeln!(out, "$ {}", line.trim())?;
                let result = store.dispatch(action);
                render_effects(&mut out, &result)?;
                if result.state_changed {
                    render_tree(&mut out, &store)?;
                }
            }
            Ok(None) => {}
            Err(error) => {
                tracing::warn!(line = line_no + 1, error = %error, "skipping script line");
                writeln!(out, "! line {}: {error}", line_no + 1)?;
            }
        }
    }

    Ok(())
}

fn render_tree(out: &mut impl Write, store: &Store) -> io::Result<()> {
    let state = store.state();
    let tree = state.tree();
    for id in state.ordered_ids() {
        let Some(entry) = tree.get(&id) else {
            continue;
        };
        let focus = if state.selection.is_focused(&id) { '>' } else { ' ' };
        let mark = if state.selection.is_selected(&id) { '*' } else { ' ' };
        let indent = "  ".repeat(tree.depth(&id).saturating_sub(1));
        let suffix = if entry.is_node() {
            if state.expanded.contains(&id) {
                "/ [-]"
            } else {
                "/ [+]"
            }
        } else {
            ""
        };
        writeln!(out, "{focus}{mark} {indent}{}{suffix}", entry.name())?;
    }
    Ok(())
}

fn render_effects(out: &mut impl Write, result: &DispatchResult) -> io::Result<()> {
    for effect in &result.effects {
        writeln!(out, "  -> {effect:?}")?;
    }
    Ok(())
}
