use hue_engine::logging::{init_logging, LoggingConfig};
use hue_ui::prelude::*;

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());
    log::info!("hue {} starting; click the window to change its color", env!("CARGO_PKG_VERSION"));

    Application::new()
        .title("Hue")
        .size(640.0, 480.0)
        .run(|cx: &mut Compose<'_>| {
            Surface::new()
                .child(ColorBox::remember_in(cx, ColorBox::STATE_KEY, ColorState::YELLOW))
                .into()
        })
}
