use std::sync::{Arc, RwLock};

use piston_window::{clear, line, EventLoop, PistonWindow, RenderEvent, WindowSettings};

use rusty_maze::render::{DrawOp, MoveStyle, RecordingSink};
use rusty_maze::{Corner, GridError, Maze};

/// Quelques couleurs
const COLOR_BG: [f32; 4] = [1.0, 1.0, 1.0, 1.0]; // blanc
const COLOR_WALL: [f32; 4] = [0.0, 0.0, 0.0, 1.0]; // noir
const COLOR_MOVE: [f32; 4] = [0.85, 0.1, 0.1, 1.0]; // rouge
const COLOR_UNDO: [f32; 4] = [0.6, 0.6, 0.6, 1.0]; // gris

const MARGIN: f64 = 20.0;
const CELL_SIZE: f64 = 40.0;
const NUM_ROWS: usize = 12;
const NUM_COLS: usize = 16;

/// Nombre d'opérations de dessin rejouées par image.
const OPS_PER_FRAME: usize = 8;

fn main() -> Result<(), GridError> {
    // Le moteur écrit sa trace dans un puits partagé, la fenêtre la rejoue.
    let sink = Arc::new(RwLock::new(RecordingSink::new()));
    let mut maze = Maze::with_corners(
        MARGIN,
        MARGIN,
        NUM_ROWS,
        NUM_COLS,
        CELL_SIZE,
        CELL_SIZE,
        Corner::TopLeft,
        Corner::BottomRight,
        Some(Box::new(sink.clone())),
        None,
    )?;
    let solved = maze.solve()?;
    println!(
        "Maze {}x{} (seed {}): solved = {}",
        NUM_COLS,
        NUM_ROWS,
        maze.seed(),
        solved
    );

    let ops = sink.read().unwrap().ops.clone();

    let width = 2.0 * MARGIN + NUM_COLS as f64 * CELL_SIZE;
    let height = 2.0 * MARGIN + NUM_ROWS as f64 * CELL_SIZE;
    let mut window: PistonWindow = WindowSettings::new("rusty-maze", [width, height])
        .exit_on_esc(true)
        .build()
        .unwrap();
    window.set_max_fps(30);

    let mut shown = 0usize;
    while let Some(event) = window.next() {
        if event.render_args().is_some() {
            // On avance la relecture de quelques opérations par image, ce
            // qui rejoue l'animation du creusage puis de la résolution.
            shown = (shown + OPS_PER_FRAME).min(ops.len());
            let visible = &ops[..shown];
            window.draw_2d(&event, |c, g, _device| {
                clear(COLOR_BG, g);
                for op in visible {
                    match op {
                        DrawOp::CellWalls { rect, walls } => {
                            // Un mur absent se dessine couleur fond : cela
                            // efface le trait posé par un passage précédent.
                            let wall_color = |present: bool| {
                                if present {
                                    COLOR_WALL
                                } else {
                                    COLOR_BG
                                }
                            };
                            line(
                                wall_color(walls.left),
                                1.0,
                                [rect.x1, rect.y1, rect.x1, rect.y2],
                                c.transform,
                                g,
                            );
                            line(
                                wall_color(walls.top),
                                1.0,
                                [rect.x1, rect.y1, rect.x2, rect.y1],
                                c.transform,
                                g,
                            );
                            line(
                                wall_color(walls.right),
                                1.0,
                                [rect.x2, rect.y1, rect.x2, rect.y2],
                                c.transform,
                                g,
                            );
                            line(
                                wall_color(walls.bottom),
                                1.0,
                                [rect.x1, rect.y2, rect.x2, rect.y2],
                                c.transform,
                                g,
                            );
                        }
                        DrawOp::Move { from, to, style } => {
                            let color = match style {
                                MoveStyle::Normal => COLOR_MOVE,
                                MoveStyle::Undo => COLOR_UNDO,
                            };
                            line(color, 2.0, [from.x, from.y, to.x, to.y], c.transform, g);
                        }
                        DrawOp::Tick => {}
                    }
                }
            });
        }
    }

    Ok(())
}
