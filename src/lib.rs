use rand::rngs::StdRng;
use rand::SeedableRng;

pub mod cell;
pub mod direction;
pub mod generator;
pub mod grid;
pub mod render;
pub mod solver;

pub use crate::grid::{Corner, Grid, GridError};
use crate::render::{NullSink, RenderSink};

/// Graine par défaut quand l'appelant n'en fournit pas : les labyrinthes
/// restent reproductibles d'une exécution à l'autre.
pub const DEFAULT_SEED: u64 = 10;

// -----------------------------------------------------------------------------
// Maze
// -----------------------------------------------------------------------------

/// Session de labyrinthe : la grille, l'entrée, la sortie, le puits de
/// rendu et la graine.
///
/// La construction exécute toute la phase de génération (layout, creusage,
/// ouverture entrée/sortie, remise à zéro des visites) ; il ne reste plus
/// qu'à appeler [`Maze::solve`]. La session possède la grille en exclusivité,
/// le creusage et la résolution ne la reçoivent qu'en emprunt le temps d'un
/// appel.
pub struct Maze {
    grid: Grid,
    start: (usize, usize),
    end: (usize, usize),
    sink: Box<dyn RenderSink>,
    seed: u64,
}

impl Maze {
    /// Construit et creuse un labyrinthe avec les coins par défaut :
    /// entrée en haut à droite, sortie en bas à gauche.
    ///
    /// `sink` à `None` branche un puits nul ; `seed` à `None` retombe sur
    /// [`DEFAULT_SEED`].
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        x1: f64,
        y1: f64,
        num_rows: usize,
        num_cols: usize,
        cell_size_x: f64,
        cell_size_y: f64,
        sink: Option<Box<dyn RenderSink>>,
        seed: Option<u64>,
    ) -> Result<Self, GridError> {
        Self::with_corners(
            x1,
            y1,
            num_rows,
            num_cols,
            cell_size_x,
            cell_size_y,
            Corner::TopRight,
            Corner::BottomLeft,
            sink,
            seed,
        )
    }

    /// Construit et creuse un labyrinthe avec des coins d'entrée et de
    /// sortie explicites.
    ///
    /// Le creusage, lui, part toujours de (0, 0) quel que soit le coin
    /// d'entrée : l'entrée et la sortie ne sont que des ouvertures de
    /// bordure, pas l'origine du parcours de génération.
    #[allow(clippy::too_many_arguments)]
    pub fn with_corners(
        x1: f64,
        y1: f64,
        num_rows: usize,
        num_cols: usize,
        cell_size_x: f64,
        cell_size_y: f64,
        start: Corner,
        end: Corner,
        sink: Option<Box<dyn RenderSink>>,
        seed: Option<u64>,
    ) -> Result<Self, GridError> {
        let mut grid = Grid::new(x1, y1, num_rows, num_cols, cell_size_x, cell_size_y)?;
        let mut sink = sink.unwrap_or_else(|| Box::new(NullSink));
        let seed = seed.unwrap_or(DEFAULT_SEED);
        let start = grid.corner(start);
        let end = grid.corner(end);

        grid.layout_and_render(sink.as_mut());
        let mut rng = StdRng::seed_from_u64(seed);
        generator::generate(&mut grid, &mut rng, start, end, sink.as_mut())?;

        Ok(Self { grid, start, end, sink, seed })
    }

    /// Cherche un chemin de l'entrée vers la sortie. Vrai si un chemin
    /// existe ; sur un labyrinthe fraîchement creusé c'est toujours le cas.
    pub fn solve(&mut self) -> Result<bool, GridError> {
        // Idempotent : une résolution précédente ne doit pas laisser de
        // drapeaux de visite derrière elle.
        self.grid.reset_visited();
        solver::solve(&mut self.grid, self.start, self.end, self.sink.as_mut())
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Indice de la cellule d'entrée.
    pub fn start(&self) -> (usize, usize) {
        self.start
    }

    /// Indice de la cellule de sortie.
    pub fn end(&self) -> (usize, usize) {
        self.end
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

// -----------------------------------------------------------------------------
// TESTS
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maze_create_cells() {
        let num_cols = 12;
        let num_rows = 10;
        let maze = Maze::new(0.0, 0.0, num_rows, num_cols, 10.0, 10.0, None, None).unwrap();
        assert_eq!(maze.grid().dimensions(), (num_cols, num_rows));
    }

    #[test]
    fn test_maze_create_big_cells() {
        let maze = Maze::new(10.0, 10.0, 3, 4, 150.0, 150.0, None, None).unwrap();
        assert_eq!(maze.grid().dimensions(), (4, 3));
        let rect = maze.grid().rect_for(3, 2);
        assert_eq!(rect.x1, 10.0 + 3.0 * 150.0);
        assert_eq!(rect.y2, 10.0 + 3.0 * 150.0);
    }

    #[test]
    fn test_maze_rejects_degenerate_dimensions() {
        let result = Maze::new(0.0, 0.0, 0, 10, 10.0, 10.0, None, None);
        assert_eq!(
            result.err(),
            Some(GridError::InvalidDimensions { num_rows: 0, num_cols: 10 }),
        );
    }

    #[test]
    fn test_maze_entrance_and_exit_top_left_bottom_right() {
        // La configuration historique : entrée (0,0), sortie (cols-1, rows-1),
        // graine 10, grille 10x10.
        let mut maze = Maze::with_corners(
            0.0,
            0.0,
            10,
            10,
            10.0,
            10.0,
            Corner::TopLeft,
            Corner::BottomRight,
            None,
            Some(10),
        )
        .unwrap();
        assert!(!maze.grid().cell(0, 0).unwrap().has_top_wall);
        assert!(!maze.grid().cell(9, 9).unwrap().has_bottom_wall);
        assert!(maze.solve().unwrap());
    }

    #[test]
    fn test_maze_default_corners() {
        // Par défaut : entrée en haut à droite (ligne 0 => mur du haut),
        // sortie en bas à gauche (ligne non nulle => mur du bas).
        let maze = Maze::new(0.0, 0.0, 8, 12, 10.0, 10.0, None, None).unwrap();
        assert_eq!(maze.start(), (11, 0));
        assert_eq!(maze.end(), (0, 7));
        assert!(!maze.grid().cell(11, 0).unwrap().has_top_wall);
        assert!(!maze.grid().cell(0, 7).unwrap().has_bottom_wall);
        // Les autres murs de bordure de ces coins restent fermés.
        assert!(maze.grid().cell(11, 0).unwrap().has_right_wall);
        assert!(maze.grid().cell(0, 7).unwrap().has_left_wall);
    }

    #[test]
    fn test_generation_leaves_visited_clean() {
        let maze = Maze::new(0.0, 0.0, 6, 6, 10.0, 10.0, None, Some(4)).unwrap();
        for i in 0..6 {
            for j in 0..6 {
                assert!(!maze.grid().cell(i, j).unwrap().visited);
            }
        }
    }

    #[test]
    fn test_default_seed_is_documented_and_used() {
        let maze = Maze::new(0.0, 0.0, 4, 4, 10.0, 10.0, None, None).unwrap();
        assert_eq!(maze.seed(), DEFAULT_SEED);

        let explicit =
            Maze::new(0.0, 0.0, 4, 4, 10.0, 10.0, None, Some(DEFAULT_SEED)).unwrap();
        for i in 0..4 {
            for j in 0..4 {
                let a = maze.grid().cell(i, j).unwrap();
                let b = explicit.grid().cell(i, j).unwrap();
                assert_eq!(a.wall_flags(), b.wall_flags());
            }
        }
    }

    #[test]
    fn test_solve_is_repeatable() {
        let mut maze = Maze::new(0.0, 0.0, 8, 8, 10.0, 10.0, None, Some(7)).unwrap();
        assert!(maze.solve().unwrap());
        // Les drapeaux de visite de la première résolution sont nettoyés.
        assert!(maze.solve().unwrap());
    }

    #[test]
    fn test_solve_on_walled_off_end() {
        let mut maze = Maze::new(0.0, 0.0, 5, 5, 10.0, 10.0, None, Some(3)).unwrap();
        // On isole la sortie après coup : ses quatre murs refermés, et les
        // côtés en vis-à-vis des voisins pour garder la symétrie.
        let (ei, ej) = maze.end();
        {
            let cell = maze.grid_mut().cell_mut(ei, ej).unwrap();
            cell.has_left_wall = true;
            cell.has_top_wall = true;
            cell.has_right_wall = true;
            cell.has_bottom_wall = true;
        }
        maze.grid_mut().cell_mut(ei + 1, ej).unwrap().has_left_wall = true;
        maze.grid_mut().cell_mut(ei, ej - 1).unwrap().has_bottom_wall = true;
        assert!(!maze.solve().unwrap());
    }
}
