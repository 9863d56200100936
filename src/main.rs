use macroquad::prelude::*;
use gol::{Grid, Renderer, Scheduler, SEED_PROBABILITY, input};

const GRID_SIZE: usize = 250;
const WINDOW_SIZE: i32 = 800;

fn window_conf() -> Conf {
    Conf {
        window_title: "Game of Life".to_owned(),
        window_width: WINDOW_SIZE,
        window_height: WINDOW_SIZE,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let mut grid = Grid::new(GRID_SIZE);
    grid.randomize(SEED_PROBABILITY);

    let mut scheduler = Scheduler::new(grid);
    let mut renderer = Renderer::new(GRID_SIZE);

    loop {
        input::handle_mouse(&mut scheduler);
        input::handle_keyboard(&mut scheduler);

        scheduler.tick(get_frame_time());

        clear_background(BLACK);
        renderer.render(&scheduler.grid);

        next_frame().await;
    }
}
