/// Template rendering adapters
mod template;
mod tera_renderer;

pub use template::DEFAULT_TEMPLATE;
pub use tera_renderer::TeraCreditsRenderer;
