/// Les quatre directions orthogonales de la grille, en coordonnées écran
/// (`j` croît vers le bas, donc `Up` correspond à `j - 1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

/// Ordre fixe d'exploration des voisins. Cet ordre sert de départage
/// aussi bien au creusage qu'à la résolution.
pub const DIRECTIONS: [Direction; 4] = [
    Direction::Left,
    Direction::Up,
    Direction::Right,
    Direction::Down,
];

impl Direction {
    /// Direction opposée (par ex. Left -> Right).
    pub fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
        }
    }

    /// Décalage (di, dj) correspondant à la direction.
    pub fn delta(self) -> (i64, i64) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
        }
    }

    /// Cellule atteinte depuis `(i, j)` en avançant d'une case dans cette
    /// direction, ou `None` si on sortirait de la grille.
    pub fn step(
        self,
        i: usize,
        j: usize,
        num_cols: usize,
        num_rows: usize,
    ) -> Option<(usize, usize)> {
        let (di, dj) = self.delta();
        let ni = i as i64 + di;
        let nj = j as i64 + dj;
        if ni < 0 || nj < 0 || ni >= num_cols as i64 || nj >= num_rows as i64 {
            return None;
        }
        Some((ni as usize, nj as usize))
    }

    /// Direction relative de `to` par rapport à `from`, si les deux cellules
    /// sont orthogonalement adjacentes.
    pub fn between(from: (usize, usize), to: (usize, usize)) -> Option<Self> {
        let di = to.0 as i64 - from.0 as i64;
        let dj = to.1 as i64 - from.1 as i64;
        match (di, dj) {
            (-1, 0) => Some(Direction::Left),
            (0, -1) => Some(Direction::Up),
            (1, 0) => Some(Direction::Right),
            (0, 1) => Some(Direction::Down),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite() {
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
    }

    #[test]
    fn test_step_stays_in_bounds() {
        assert_eq!(Direction::Left.step(0, 0, 3, 3), None);
        assert_eq!(Direction::Up.step(0, 0, 3, 3), None);
        assert_eq!(Direction::Right.step(2, 0, 3, 3), None);
        assert_eq!(Direction::Down.step(0, 2, 3, 3), None);
        assert_eq!(Direction::Right.step(1, 1, 3, 3), Some((2, 1)));
        assert_eq!(Direction::Up.step(1, 1, 3, 3), Some((1, 0)));
    }

    #[test]
    fn test_between_adjacent_only() {
        assert_eq!(Direction::between((1, 1), (0, 1)), Some(Direction::Left));
        assert_eq!(Direction::between((1, 1), (1, 0)), Some(Direction::Up));
        assert_eq!(Direction::between((1, 1), (2, 1)), Some(Direction::Right));
        assert_eq!(Direction::between((1, 1), (1, 2)), Some(Direction::Down));
        assert_eq!(Direction::between((1, 1), (2, 2)), None);
        assert_eq!(Direction::between((1, 1), (1, 1)), None);
    }
}
