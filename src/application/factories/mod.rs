mod exporter_factory;
mod renderer_factory;

pub use exporter_factory::ExporterFactory;
pub use renderer_factory::RendererFactory;
