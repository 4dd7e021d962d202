use crate::direction::DIRECTIONS;
use crate::grid::{Grid, GridError};
use crate::render::{MoveStyle, Point, RenderSink};

/// Une étape du parcours : la cellule courante et l'indice de la prochaine
/// direction à essayer dans l'ordre fixe.
struct Frame {
    i: usize,
    j: usize,
    next_dir: usize,
}

/// Résolution en profondeur d'abord avec retour arrière, de `start` vers
/// `end`. Renvoie vrai dès qu'un chemin est trouvé.
///
/// Version à pile explicite du parcours récursif : chaque trame reprend ses
/// directions restantes là où elle s'était arrêtée quand une branche fille
/// échoue. Un échec n'est pas une erreur, c'est le signal de retour arrière ;
/// une sortie inatteignable termine simplement sur `false` grâce au drapeau
/// de visite. Les murs sont supposés figés pendant l'appel.
pub fn solve(
    grid: &mut Grid,
    start: (usize, usize),
    end: (usize, usize),
    sink: &mut dyn RenderSink,
) -> Result<bool, GridError> {
    enter(grid, start, sink)?;
    if start == end {
        return Ok(true);
    }
    let mut stack = vec![Frame { i: start.0, j: start.1, next_dir: 0 }];

    while !stack.is_empty() {
        let top = stack.len() - 1;
        let (i, j) = (stack[top].i, stack[top].j);
        let mut advanced = false;

        while stack[top].next_dir < DIRECTIONS.len() {
            let dir = DIRECTIONS[stack[top].next_dir];
            stack[top].next_dir += 1;

            let (num_cols, num_rows) = grid.dimensions();
            let (ni, nj) = match dir.step(i, j, num_cols, num_rows) {
                Some(next) => next,
                None => continue,
            };
            if grid.wall_blocks(i, j, dir) {
                continue;
            }
            // Le drapeau de visite est relu au moment de la tentative :
            // une branche précédente a pu passer par là entre-temps.
            if grid.cell(ni, nj)?.visited {
                continue;
            }

            sink.draw_move(cell_center(grid, i, j)?, cell_center(grid, ni, nj)?, MoveStyle::Normal);
            enter(grid, (ni, nj), sink)?;
            if (ni, nj) == end {
                // Succès : on court-circuite, les voisins restants ne sont
                // pas explorés.
                return Ok(true);
            }
            stack.push(Frame { i: ni, j: nj, next_dir: 0 });
            advanced = true;
            break;
        }

        if !advanced {
            // Cul-de-sac : la trame est abandonnée et son parent efface le
            // déplacement d'un trait de retour.
            if let Some(failed) = stack.pop() {
                if let Some(parent) = stack.last() {
                    sink.draw_move(
                        cell_center(grid, parent.i, parent.j)?,
                        cell_center(grid, failed.i, failed.j)?,
                        MoveStyle::Undo,
                    );
                }
            }
        }
    }
    Ok(false)
}

/// Entrée dans une cellule : marquage + tick de cadence.
fn enter(
    grid: &mut Grid,
    (i, j): (usize, usize),
    sink: &mut dyn RenderSink,
) -> Result<(), GridError> {
    grid.cell_mut(i, j)?.visited = true;
    sink.tick();
    Ok(())
}

/// Centre pixel d'une cellule. Si le layout n'a pas eu lieu, on retombe sur
/// le rectangle théorique de la grille, qui ne dépend d'aucun état.
fn cell_center(grid: &Grid, i: usize, j: usize) -> Result<Point, GridError> {
    Ok(match grid.cell(i, j)?.center() {
        Some(center) => center,
        None => grid.rect_for(i, j).center(),
    })
}
