use std::fmt;

use crate::cell::Cell;
use crate::direction::{Direction, DIRECTIONS};
use crate::render::{Rect, RenderSink};

/// Erreurs de la grille.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Accès à un indice hors de `[0, num_cols) x [0, num_rows)`.
    OutOfBounds { i: usize, j: usize },
    /// Dimensions nulles au moment de la construction.
    InvalidDimensions { num_rows: usize, num_cols: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::OutOfBounds { i, j } => {
                write!(f, "cell index ({}, {}) out of bounds", i, j)
            }
            GridError::InvalidDimensions { num_rows, num_cols } => {
                write!(f, "invalid grid dimensions {}x{}", num_cols, num_rows)
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Les quatre coins nommés de la grille, en indices de cellules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

/// Grille du labyrinthe.
///
/// Les cellules sont rangées colonne par colonne : `cells[i][j]` est la
/// cellule de la colonne `i`, ligne `j` (ligne 0 en haut). Les dimensions
/// sont figées à la construction, la grille n'est jamais redimensionnée.
#[derive(Debug)]
pub struct Grid {
    cells: Vec<Vec<Cell>>,
    x1: f64,
    y1: f64,
    num_rows: usize,
    num_cols: usize,
    cell_size_x: f64,
    cell_size_y: f64,
}

impl Grid {
    /// Crée une grille entièrement murée.
    ///
    /// `(x1, y1)` est le coin haut-gauche du labyrinthe en pixels,
    /// `cell_size_x`/`cell_size_y` la taille d'une cellule.
    /// Échoue si `num_rows` ou `num_cols` vaut zéro.
    pub fn new(
        x1: f64,
        y1: f64,
        num_rows: usize,
        num_cols: usize,
        cell_size_x: f64,
        cell_size_y: f64,
    ) -> Result<Self, GridError> {
        if num_rows == 0 || num_cols == 0 {
            return Err(GridError::InvalidDimensions { num_rows, num_cols });
        }
        let cells = (0..num_cols)
            .map(|_| (0..num_rows).map(|_| Cell::new()).collect())
            .collect();
        Ok(Self {
            cells,
            x1,
            y1,
            num_rows,
            num_cols,
            cell_size_x,
            cell_size_y,
        })
    }

    /// Dimensions de la grille : (nombre de colonnes, nombre de lignes).
    pub fn dimensions(&self) -> (usize, usize) {
        (self.num_cols, self.num_rows)
    }

    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    fn check(&self, i: usize, j: usize) -> Result<(), GridError> {
        if i >= self.num_cols || j >= self.num_rows {
            return Err(GridError::OutOfBounds { i, j });
        }
        Ok(())
    }

    /// Cellule en lecture seule.
    pub fn cell(&self, i: usize, j: usize) -> Result<&Cell, GridError> {
        self.check(i, j)?;
        Ok(&self.cells[i][j])
    }

    /// Cellule en écriture.
    pub fn cell_mut(&mut self, i: usize, j: usize) -> Result<&mut Cell, GridError> {
        self.check(i, j)?;
        Ok(&mut self.cells[i][j])
    }

    /// Rectangle pixel de la cellule `(i, j)`.
    ///
    /// Fonction pure de l'indice, de l'origine et de la taille de cellule :
    /// aucun état de mur n'entre en jeu.
    pub fn rect_for(&self, i: usize, j: usize) -> Rect {
        let x1 = self.x1 + (i as f64) * self.cell_size_x;
        let y1 = self.y1 + (j as f64) * self.cell_size_y;
        Rect {
            x1,
            y1,
            x2: x1 + self.cell_size_x,
            y2: y1 + self.cell_size_y,
        }
    }

    /// Indice de cellule d'un coin nommé.
    pub fn corner(&self, corner: Corner) -> (usize, usize) {
        match corner {
            Corner::TopLeft => (0, 0),
            Corner::TopRight => (self.num_cols - 1, 0),
            Corner::BottomRight => (self.num_cols - 1, self.num_rows - 1),
            Corner::BottomLeft => (0, self.num_rows - 1),
        }
    }

    /// Voisins orthogonaux de `(i, j)` dans l'ordre fixe gauche, haut,
    /// droite, bas. Seuls les voisins dans la grille sont renvoyés, et si
    /// `exclude_visited` est vrai, les voisins déjà visités sont écartés.
    pub fn neighbors(&self, i: usize, j: usize, exclude_visited: bool) -> Vec<(usize, usize)> {
        let mut result = Vec::with_capacity(4);
        for dir in DIRECTIONS {
            if let Some((ni, nj)) = dir.step(i, j, self.num_cols, self.num_rows) {
                if exclude_visited && self.cells[ni][nj].visited {
                    continue;
                }
                result.push((ni, nj));
            }
        }
        result
    }

    /// Vrai si un mur de la cellule `(i, j)` bloque un déplacement dans la
    /// direction donnée. Le test porte sur la cellule courante, la symétrie
    /// des murs rend le côté opposé équivalent. Hors limites => bloqué.
    pub fn wall_blocks(&self, i: usize, j: usize, dir: Direction) -> bool {
        match self.cell(i, j) {
            Ok(cell) => match dir {
                Direction::Left => cell.has_left_wall,
                Direction::Up => cell.has_top_wall,
                Direction::Right => cell.has_right_wall,
                Direction::Down => cell.has_bottom_wall,
            },
            Err(_) => true,
        }
    }

    /// Assigne le rectangle de chaque cellule et dessine ses murs via le
    /// puits, colonne par colonne puis ligne par ligne (l'ordre de
    /// construction), avec un tick de cadence après chaque cellule.
    ///
    /// Cet ordre fait partie du contrat observable : une trace enregistrée
    /// doit pouvoir être rejouée à l'identique.
    pub fn layout_and_render(&mut self, sink: &mut dyn RenderSink) {
        for i in 0..self.num_cols {
            for j in 0..self.num_rows {
                let rect = self.rect_for(i, j);
                self.cells[i][j].set_rect(rect);
                sink.draw_cell_walls(rect, self.cells[i][j].wall_flags());
                sink.tick();
            }
        }
    }

    /// Remet le drapeau de visite de toutes les cellules à faux.
    pub fn reset_visited(&mut self) {
        for column in &mut self.cells {
            for cell in column {
                cell.visited = false;
            }
        }
    }
}
