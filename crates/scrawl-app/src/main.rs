//! Session inspector entry point (native).
//!
//! Lists the sessions saved by the editor, with label counts and history
//! depth, from the platform storage location.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use scrawl_core::Storage;

    env_logger::init();
    log::info!("Starting Scrawl session inspector");

    let storage = match scrawl_core::create_default_storage() {
        Ok(storage) => storage,
        Err(e) => {
            eprintln!("Could not open session storage: {e}");
            std::process::exit(1);
        }
    };

    let keys = match storage.list() {
        Ok(keys) => keys,
        Err(e) => {
            eprintln!("Could not list sessions: {e}");
            std::process::exit(1);
        }
    };

    if keys.is_empty() {
        println!("No saved sessions in {}", storage.base_path().display());
        return;
    }

    for key in keys {
        match storage.load(&key) {
            Ok(board) => {
                let history = board.history();
                if history.is_empty() {
                    println!("{key}: {} label(s), no history", board.len());
                } else {
                    println!(
                        "{key}: {} label(s), {} recorded action(s) ({} undoable, {} redoable)",
                        board.len(),
                        history.len(),
                        history.undo_stack().len(),
                        history.redo_stack().len(),
                    );
                }
            }
            Err(e) => {
                log::warn!("Skipping unreadable session '{}': {}", key, e);
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The web front end drives EditorApp directly; there is no wasm binary.
}
