use std::error::Error;

use log::info;

use voxel_traverse::view::ViewController;
use voxel_traverse::visualization::render_scene;
use voxel_traverse::{Grid2d, load_scene};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let (Some(scene_path), Some(out_path)) = (args.next(), args.next()) else {
        eprintln!("usage: snapshot <scene.yaml> <out.png>");
        return Ok(());
    };

    let scene = load_scene(&scene_path)?;
    let controller = ViewController::from_scene(&scene);

    let mut grid = Grid2d::new(1, 1)?;
    controller.view().sync_grid(&mut grid)?;

    let cells = controller.traverse(&grid);
    let img = render_scene(controller.view(), controller.handles(), &cells);
    img.save(&out_path)?;

    info!(
        "wrote {out_path}: {}x{} grid, {} cells traversed",
        grid.width(),
        grid.height(),
        cells.len()
    );
    Ok(())
}
