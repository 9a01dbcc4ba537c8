use crate::context::ExecutionContext;
use crate::presentation::renderers::TuiRenderer;
use anyhow::Result;
use paneshop_core::{MemoryStateStore, SavedState, ShoppingSession, StateStore};
use paneshop_types::{Catalog, Orientation};
use std::sync::Arc;

pub fn handle(ctx: &ExecutionContext, resume: bool, no_save: bool) -> Result<()> {
    let config = ctx.config()?.clone();
    let store = state_store(ctx, resume, no_save)?;

    let (cols, rows) = crossterm::terminal::size()?;
    let orientation = config.orientation_for(cols, rows, ctx.orientation_override);

    let session = start_session(ctx.catalog(), orientation, store.as_ref(), resume)?;
    tracing::info!(%orientation, resume, no_save, "browser starting");

    let renderer = TuiRenderer::new(session, config, ctx.orientation_override);
    let session = renderer.run()?;

    finish_session(store.as_ref(), &session)
}

/// Store for one browse run.
///
/// `--no-save` runs read the file once (when resuming) and keep the exit
/// snapshot in memory, so `state.json` is never written.
fn state_store(
    ctx: &ExecutionContext,
    resume: bool,
    no_save: bool,
) -> Result<Box<dyn StateStore>> {
    let file = ctx.state_store();
    if !no_save {
        return Ok(Box::new(file));
    }

    let seed = if resume {
        file.load()?
    } else {
        SavedState::default()
    };
    Ok(Box::new(MemoryStateStore::new(seed)))
}

fn start_session(
    catalog: Arc<Catalog>,
    orientation: Orientation,
    store: &dyn StateStore,
    resume: bool,
) -> Result<ShoppingSession> {
    let saved = if resume {
        store.load()?
    } else {
        SavedState::default()
    };
    Ok(ShoppingSession::restore(catalog, orientation, saved))
}

fn finish_session(store: &dyn StateStore, session: &ShoppingSession) -> Result<()> {
    store.save(&session.saved_state())?;
    tracing::info!(selected = ?session.selection().selected_id(), "browser closed");
    Ok(())
}
