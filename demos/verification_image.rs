// MIT/Apache2 License

use easel::{
    recording::{MemoryLoader, RecordingSurface},
    DrawSpec, Painter, Surface, TextAlign,
};

pub fn verification_image<S: Surface>(painter: &mut Painter<S>) -> easel::Result {
    painter.clear()?;

    painter.border_rect(50.0, 50.0, 150.0, 100.0, "blue", "black", Some(8.0))?;
    painter.border_circle(300.0, 200.0, 50.0, "green", "black", Some(8.0))?;
    painter.line(250.0, 125.0, 350.0, 275.0, "black", None)?;
    painter.dot(10.0, 10.0, "red")?;

    painter.set_font("24px sans-serif")?;
    painter.outline_text(320.0, 40.0, "chalk", "white", None, Some(TextAlign::Center))?;

    painter.draw_image("logo", DrawSpec::at(400.0, 300.0))?;

    painter.surface_mut().flush()
}

fn main() -> easel::Result {
    env_logger::init();

    let mut loader = MemoryLoader::new();
    loader.preload("logo.png", 64, 64);

    let mut painter = Painter::new(RecordingSurface::with_loader(640.0, 480.0, loader))?;
    painter.register_image("logo", "logo.png")?;
    verification_image(&mut painter)?;

    for command in painter.surface().commands() {
        println!("{:?}", command);
    }

    Ok(())
}
