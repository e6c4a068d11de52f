use std::path::Path;

use lifeboard::board::Board;
use lifeboard::camera::Camera;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let path = args.get(1).map(Path::new).expect("A .brd file is required");
    let steps: u64 = args
        .get(2)
        .map(|s| s.parse().expect("Invalid step count"))
        .unwrap_or(1);

    let mut board = Board::load(false, path).expect("Failed to load .brd file");

    for _ in 0..steps {
        board.run_iteration();
    }

    let mut cam = Camera::new(board.width(), board.height());
    cam.draw_grid(board.grid());

    print!("{}", cam.render());
    println!(
        "iter {}  births {}  deaths {}",
        board.iterations(),
        board.births(),
        board.deaths()
    );
}
