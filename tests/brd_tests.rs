use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use lifeboard::board::Board;

#[test]
fn test_boards() -> anyhow::Result<()> {
    let board_dir = std::fs::read_dir("tests/boards")?;
    let mut tested = 0;
    let mut failed = Vec::new();

    for entry in board_dir {
        let path = entry?.path();

        match Board::load(false, &path) {
            Ok(_) => tested += 1,
            Err(e) => failed.push((path.clone(), e)),
        }
    }

    if !failed.is_empty() {
        for (path, err) in &failed {
            eprintln!("Failed to load {:?}: {:#}", path, err);
        }

        panic!(
            "{}/{} boards failed to load",
            failed.len(),
            tested + failed.len()
        );
    }

    println!("Successfully loaded {} boards", tested);

    Ok(())
}

#[test]
fn round_trips_through_disk() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("roundtrip.brd");

    let mut board = Board::new(true, 6, 9);
    board.randomize_with(&mut StdRng::seed_from_u64(42), 0.4);
    board.run_iteration();
    board.save(&path)?;

    let loaded = Board::load(true, &path)?;

    assert_eq!(loaded.height(), board.height());
    assert_eq!(loaded.width(), board.width());
    assert_eq!(loaded.grid().cells(), board.grid().cells());

    // counters are not persisted
    assert_eq!(loaded.iterations(), 0);
    assert_eq!(loaded.births(), 0);
    assert_eq!(loaded.deaths(), 0);

    Ok(())
}

#[test]
fn glider_walks_diagonally() -> anyhow::Result<()> {
    let mut board = Board::load(false, "tests/boards/glider.brd")?;

    // a glider has period 4 with displacement (+1, +1)
    for _ in 0..4 {
        board.run_iteration();
    }

    let mut expected = Board::load(false, "tests/boards/glider.brd")?;
    let shifted: Vec<(usize, usize)> = alive_cells(&expected)
        .into_iter()
        .map(|(r, c)| (r + 1, c + 1))
        .collect();
    expected.clear();
    for &(r, c) in &shifted {
        expected.toggle(r, c);
    }

    assert_eq!(alive_cells(&board), alive_cells(&expected));

    Ok(())
}

fn alive_cells(board: &Board) -> Vec<(usize, usize)> {
    let mut cells = Vec::new();
    for (row, cols) in board.grid().rows().enumerate() {
        for (col, &alive) in cols.iter().enumerate() {
            if alive {
                cells.push((row, col));
            }
        }
    }

    cells
}

proptest! {
    #[test]
    fn save_load_identity(cells in prop::collection::vec(any::<bool>(), 35)) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.brd");

        let mut board = Board::new(false, 5, 7);
        for (i, &alive) in cells.iter().enumerate() {
            if alive {
                board.toggle(i / 7, i % 7);
            }
        }

        board.save(&path).unwrap();
        let loaded = Board::load(false, &path).unwrap();

        prop_assert_eq!(loaded.grid().cells(), board.grid().cells());
    }
}
