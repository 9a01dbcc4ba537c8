use crate::context::ExecutionContext;
use crate::presentation::renderers::{ConsoleRenderer, Renderer};
use crate::presentation::view_models::{CommandResultViewModel, LayoutViewModel};
use anyhow::{Result, anyhow};
use paneshop_core::{SavedState, ShoppingSession};
use paneshop_types::ProductId;

pub fn handle(
    ctx: &ExecutionContext,
    width: Option<u16>,
    height: Option<u16>,
    selected: Option<ProductId>,
) -> Result<()> {
    let (width, height) = match (width, height) {
        (Some(w), Some(h)) => (w, h),
        (w, h) => {
            let (terminal_size::Width(tw), terminal_size::Height(th)) =
                terminal_size::terminal_size().ok_or_else(|| {
                    anyhow!("No terminal detected; pass both --width and --height")
                })?;
            (w.unwrap_or(tw), h.unwrap_or(th))
        }
    };

    let catalog = ctx.catalog();
    if let Some(id) = selected {
        catalog.require(id)?;
    }

    let config = ctx.config()?;
    let orientation = config.orientation_for(width, height, ctx.orientation_override);
    let session = ShoppingSession::restore(catalog, orientation, SavedState { selected });

    let view = LayoutViewModel::new(
        width,
        height,
        orientation,
        session.presentation(),
        session.selection().selected_id(),
    );
    ConsoleRenderer::new(ctx.json_output()).render(CommandResultViewModel::new(view))
}
