use crate::render::{Point, Rect, WallFlags};

/// Une cellule du labyrinthe.
///
/// Une cellule possède quatre murs indépendants (présents par défaut),
/// un drapeau de visite et, une fois le layout fait par la grille,
/// son rectangle en pixels.
#[derive(Debug, Clone)]
pub struct Cell {
    /// Mur gauche présent.
    pub has_left_wall: bool,
    /// Mur haut présent.
    pub has_top_wall: bool,
    /// Mur droit présent.
    pub has_right_wall: bool,
    /// Mur bas présent.
    pub has_bottom_wall: bool,
    /// Drapeau de visite, remis à zéro entre le creusage et la résolution.
    pub visited: bool,
    rect: Option<Rect>,
}

impl Cell {
    /// Crée une cellule entièrement murée, non visitée, sans rectangle.
    pub fn new() -> Self {
        Self {
            has_left_wall: true,
            has_top_wall: true,
            has_right_wall: true,
            has_bottom_wall: true,
            visited: false,
            rect: None,
        }
    }

    /// Rectangle assigné par la grille au layout, `None` avant.
    pub fn rect(&self) -> Option<Rect> {
        self.rect
    }

    /// Assigne le rectangle de la cellule. Appelé une seule fois par la
    /// grille au layout.
    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = Some(rect);
    }

    /// Centre du rectangle de la cellule.
    ///
    /// Renvoie `None` tant que la grille n'a pas fait le layout : le centre
    /// n'est pas défini avant l'assignation du rectangle, et on préfère un
    /// `Option` explicite à une valeur sentinelle.
    pub fn center(&self) -> Option<Point> {
        self.rect.map(|rect| rect.center())
    }

    /// Instantané des quatre murs, pour le rendu.
    pub fn wall_flags(&self) -> WallFlags {
        WallFlags {
            left: self.has_left_wall,
            top: self.has_top_wall,
            right: self.has_right_wall,
            bottom: self.has_bottom_wall,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new()
    }
}
