use rand::seq::IndexedRandom;
use rand::Rng;

use crate::direction::Direction;
use crate::grid::{Grid, GridError};
use crate::render::RenderSink;

/// Phase de génération complète : creusage aléatoire depuis (0, 0),
/// ouverture de l'entrée et de la sortie sur la bordure, puis remise à
/// zéro des drapeaux de visite pour que la résolution reparte propre.
pub fn generate<R: Rng>(
    grid: &mut Grid,
    rng: &mut R,
    start: (usize, usize),
    end: (usize, usize),
    sink: &mut dyn RenderSink,
) -> Result<(), GridError> {
    carve(grid, rng, sink)?;
    break_entrance_and_exit(grid, start, end, sink)?;
    grid.reset_visited();
    Ok(())
}

/// Creuse un labyrinthe parfait par parcours en profondeur aléatoire.
///
/// Version à pile explicite du creusage récursif, pour ne pas dépendre de
/// la pile native sur les grandes grilles (le pire cas est un couloir de
/// `num_cols * num_rows` cellules). La sémantique récursive est conservée :
/// à chaque tour on réévalue les voisins non visités du sommet de pile, si
/// bien qu'une cellule peut ouvrir plusieurs murs avant d'être épuisée.
///
/// Le creusage part toujours de (0, 0), indépendamment des coins
/// d'entrée/sortie choisis pour la session.
pub fn carve<R: Rng>(
    grid: &mut Grid,
    rng: &mut R,
    sink: &mut dyn RenderSink,
) -> Result<(), GridError> {
    grid.reset_visited();
    grid.cell_mut(0, 0)?.visited = true;
    let mut stack: Vec<(usize, usize)> = vec![(0, 0)];

    while let Some(&(i, j)) = stack.last() {
        let candidates = grid.neighbors(i, j, true);
        if candidates.is_empty() {
            // Cul-de-sac : la cellule est finalisée, on la dessine et on
            // remonte d'un cran.
            let rect = grid.rect_for(i, j);
            let walls = grid.cell(i, j)?.wall_flags();
            sink.draw_cell_walls(rect, walls);
            sink.tick();
            stack.pop();
            continue;
        }

        // Unique tirage aléatoire de tout le moteur : un candidat uniforme
        // par itération. `candidates` n'est pas vide ici.
        let &(ni, nj) = candidates.choose(rng).unwrap();
        if let Some(dir) = Direction::between((i, j), (ni, nj)) {
            open_wall_pair(grid, (i, j), (ni, nj), dir)?;
        }
        grid.cell_mut(ni, nj)?.visited = true;
        stack.push((ni, nj));
    }
    Ok(())
}

/// Ouvre symétriquement la paire de murs entre deux cellules adjacentes,
/// `dir` étant la direction de `to` vue depuis `from`. C'est le seul
/// endroit du moteur qui touche aux murs, ce qui garantit l'invariant de
/// symétrie entre voisins.
fn open_wall_pair(
    grid: &mut Grid,
    from: (usize, usize),
    to: (usize, usize),
    dir: Direction,
) -> Result<(), GridError> {
    let (i, j) = from;
    let (ni, nj) = to;
    match dir {
        Direction::Left => {
            grid.cell_mut(i, j)?.has_left_wall = false;
            grid.cell_mut(ni, nj)?.has_right_wall = false;
        }
        Direction::Up => {
            grid.cell_mut(i, j)?.has_top_wall = false;
            grid.cell_mut(ni, nj)?.has_bottom_wall = false;
        }
        Direction::Right => {
            grid.cell_mut(i, j)?.has_right_wall = false;
            grid.cell_mut(ni, nj)?.has_left_wall = false;
        }
        Direction::Down => {
            grid.cell_mut(i, j)?.has_bottom_wall = false;
            grid.cell_mut(ni, nj)?.has_top_wall = false;
        }
    }
    Ok(())
}

/// Ouvre le labyrinthe sur sa bordure aux cellules d'entrée et de sortie.
///
/// Règle : une cellule en ligne 0 s'ouvre par le haut, toute autre par le
/// bas. La règle ne regarde que la ligne, jamais la colonne. Chaque cellule
/// ouverte est redessinée via le puits.
pub fn break_entrance_and_exit(
    grid: &mut Grid,
    start: (usize, usize),
    end: (usize, usize),
    sink: &mut dyn RenderSink,
) -> Result<(), GridError> {
    for &(i, j) in &[start, end] {
        {
            let cell = grid.cell_mut(i, j)?;
            if j == 0 {
                cell.has_top_wall = false;
            } else {
                cell.has_bottom_wall = false;
            }
        }
        let rect = grid.rect_for(i, j);
        let walls = grid.cell(i, j)?.wall_flags();
        sink.draw_cell_walls(rect, walls);
        sink.tick();
    }
    Ok(())
}
