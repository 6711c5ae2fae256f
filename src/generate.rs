use crate::config::IconPlan;
use crate::error::{IconError, Result};
use crate::models::{GenMessage, GeneratedFile, RenderSpec};
use crate::render::render_icon;
use crate::utils::{inspect_file, save_icon};
use crossbeam_channel::Sender;
use rayon::prelude::*;
use std::fs;
use std::thread;

fn send(tx: &Sender<GenMessage>, msg: GenMessage) -> Result<()> {
    tx.send(msg).map_err(|e| IconError::Channel(e.to_string()))
}

fn render_target(spec: &RenderSpec, tx: &Sender<GenMessage>) -> Result<GeneratedFile> {
    let image = render_icon(spec.size);
    let file = save_icon(&image, spec)?;
    send(tx, GenMessage::Generated(file.clone()))?;
    Ok(file)
}

/// Renders and writes every plan target in parallel.
///
/// Results come back in plan order. The first failing target aborts the
/// run; anything already written stays on disk.
pub fn generate_icons(plan: &IconPlan, tx: &Sender<GenMessage>) -> Result<Vec<GeneratedFile>> {
    plan.validate()?;
    fs::create_dir_all(&plan.icons_dir)?;
    fs::create_dir_all(&plan.public_dir)?;

    let targets = plan.targets();
    send(tx, GenMessage::Log(format!("Rendering {} icons...", targets.len())))?;

    targets
        .par_iter()
        .map(|spec| render_target(spec, tx))
        .collect()
}

/// Runs generation on a worker thread and hands every message to `on_message`
/// on the calling thread as it arrives.
pub fn run<F>(plan: &IconPlan, mut on_message: F) -> Result<Vec<GeneratedFile>>
where
    F: FnMut(&GenMessage),
{
    let (tx, rx) = crossbeam_channel::unbounded();
    thread::scope(|s| {
        // `tx` moves into the worker, so the loop below ends when it finishes.
        let worker = s.spawn(move || generate_icons(plan, &tx));
        for msg in rx.iter() {
            on_message(&msg);
        }
        worker
            .join()
            .map_err(|_| IconError::Channel("generator thread panicked".to_string()))?
    })
}

/// Formats a message the way the driver prints it.
pub fn describe(msg: &GenMessage) -> String {
    match msg {
        GenMessage::Generated(file) => {
            let name = file
                .path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_default();
            format!("Generated {} ({}x{})", name, file.size, file.size)
        }
        GenMessage::Log(line) => line.clone(),
    }
}

/// Re-opens every generated file and checks it decodes to the recorded size
/// with an unchanged digest. Other files next to the outputs are ignored.
pub fn verify(generated: &[GeneratedFile]) -> Result<usize> {
    for file in generated {
        match inspect_file(&file.path) {
            Ok(found) if found.hash == file.hash && found.size == file.size => {}
            _ => return Err(IconError::Verify(file.path.display().to_string())),
        }
    }
    Ok(generated.len())
}
