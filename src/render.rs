use std::sync::{Arc, RwLock};

/// Un point en pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Rectangle pixel d'une cellule : coin haut-gauche (x1, y1),
/// coin bas-droit (x2, y2).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Rect {
    /// Centre du rectangle.
    pub fn center(&self) -> Point {
        Point {
            x: (self.x1 + self.x2) / 2.0,
            y: (self.y1 + self.y2) / 2.0,
        }
    }
}

/// Instantané des quatre murs d'une cellule, tel que transmis au rendu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallFlags {
    pub left: bool,
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
}

/// Style d'un trait de déplacement : avancée normale ou retour arrière.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveStyle {
    Normal,
    Undo,
}

/// Puits de rendu : le moteur y pousse de la géométrie, il n'y lit jamais
/// rien. La résolution et le creusage doivent donner exactement le même
/// résultat quel que soit le puits branché.
pub trait RenderSink {
    /// Dessine les quatre murs d'une cellule (un mur absent s'efface).
    fn draw_cell_walls(&mut self, rect: Rect, walls: WallFlags);
    /// Dessine un trait entre deux centres de cellules.
    fn draw_move(&mut self, from: Point, to: Point, style: MoveStyle);
    /// Point de cadence : appelé après chaque mutation visible.
    fn tick(&mut self);
}

/// Puits nul, utilisé par défaut et dans les tests de logique pure.
#[derive(Debug, Default)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn draw_cell_walls(&mut self, _rect: Rect, _walls: WallFlags) {}
    fn draw_move(&mut self, _from: Point, _to: Point, _style: MoveStyle) {}
    fn tick(&mut self) {}
}

/// Une opération de dessin enregistrée.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    CellWalls { rect: Rect, walls: WallFlags },
    Move { from: Point, to: Point, style: MoveStyle },
    Tick,
}

/// Puits qui enregistre la trace de dessin au lieu de l'afficher.
/// Le binaire s'en sert pour rejouer l'animation image par image,
/// les tests pour vérifier l'ordre des opérations.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub ops: Vec<DrawOp>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Nombre de ticks enregistrés (un tick par cellule dessinée ou visitée).
    pub fn tick_count(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Tick)).count()
    }

    /// Repart d'une trace vide.
    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl RenderSink for RecordingSink {
    fn draw_cell_walls(&mut self, rect: Rect, walls: WallFlags) {
        self.ops.push(DrawOp::CellWalls { rect, walls });
    }

    fn draw_move(&mut self, from: Point, to: Point, style: MoveStyle) {
        self.ops.push(DrawOp::Move { from, to, style });
    }

    fn tick(&mut self) {
        self.ops.push(DrawOp::Tick);
    }
}

/// Partage d'un même puits entre la session et la boucle d'affichage.
impl<S: RenderSink> RenderSink for Arc<RwLock<S>> {
    fn draw_cell_walls(&mut self, rect: Rect, walls: WallFlags) {
        self.write().unwrap().draw_cell_walls(rect, walls);
    }

    fn draw_move(&mut self, from: Point, to: Point, style: MoveStyle) {
        self.write().unwrap().draw_move(from, to, style);
    }

    fn tick(&mut self) {
        self.write().unwrap().tick();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_center() {
        let rect = Rect { x1: 10.0, y1: 20.0, x2: 30.0, y2: 60.0 };
        assert_eq!(rect.center(), Point { x: 20.0, y: 40.0 });
    }

    #[test]
    fn test_recording_sink_keeps_order() {
        let mut sink = RecordingSink::new();
        let rect = Rect { x1: 0.0, y1: 0.0, x2: 10.0, y2: 10.0 };
        let walls = WallFlags { left: true, top: true, right: true, bottom: true };
        sink.draw_cell_walls(rect, walls);
        sink.tick();
        sink.draw_move(rect.center(), Point { x: 15.0, y: 5.0 }, MoveStyle::Undo);

        assert_eq!(sink.ops.len(), 3);
        assert_eq!(sink.ops[0], DrawOp::CellWalls { rect, walls });
        assert_eq!(sink.ops[1], DrawOp::Tick);
        assert_eq!(sink.tick_count(), 1);
    }

    #[test]
    fn test_shared_sink_records_through_lock() {
        let shared = Arc::new(RwLock::new(RecordingSink::new()));
        let mut handle = shared.clone();
        handle.tick();
        handle.tick();
        assert_eq!(shared.read().unwrap().tick_count(), 2);
    }
}
