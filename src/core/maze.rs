//! Grid data and randomized maze generation.

use rand::Rng;
use rand::seq::SliceRandom;

use super::compass::Compass;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    Open,
    Wall,
}

/// Celda del grid, por valor.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Rectangular cell grid, `(2W+1) x (2H+1)` for a `W x H` room request.
/// Odd-odd cells are the rooms; everything else starts as wall and only
/// opens up when carved as a connector. Out-of-bounds reads answer `Wall`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Grid inicial: cuartos abiertos en las coordenadas impares, muro en
    /// todo lo demás.
    pub(crate) fn walled(rooms_wide: usize, rooms_high: usize) -> Self {
        let width = rooms_wide * 2 + 1;
        let height = rooms_high * 2 + 1;
        let mut cells = vec![Cell::Wall; width * height];
        for y in (1..height).step_by(2) {
            for x in (1..width).step_by(2) {
                cells[y * width + x] = Cell::Open;
            }
        }
        Self { width, height, cells }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: i32, y: i32) -> Cell {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return Cell::Wall;
        }
        self.cells[y as usize * self.width + x as usize]
    }

    pub fn is_open(&self, c: Coord) -> bool {
        self.get(c.x, c.y) == Cell::Open
    }

    pub(crate) fn carve(&mut self, x: i32, y: i32) {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            self.cells[y as usize * self.width + x as usize] = Cell::Open;
        }
    }
}

/// Maze generado: grid perfecto (un solo camino simple entre cualquier par
/// de celdas abiertas) más los puntos de inicio y meta.
pub struct Maze {
    pub grid: Grid,
    pub start: Coord,
    pub goal: Coord,
}

impl Maze {
    pub fn generate<R: Rng>(rooms_wide: usize, rooms_high: usize, rng: &mut R) -> Self {
        assert!(
            rooms_wide > 0 && rooms_high > 0,
            "maze needs at least one room in each direction"
        );
        let mut grid = Grid::walled(rooms_wide, rooms_high);
        carve_from(&mut grid, Coord::new(1, 1), rng);
        let (start, goal) = pick_points(&grid, rng);
        Self { grid, start, goal }
    }
}

/// Backtracker recursivo con stack explícito: cada frame guarda su orden
/// barajado de direcciones y el índice donde quedó, igual que la versión
/// con recursión pero sin reventar el stack en mazes grandes.
fn carve_from<R: Rng>(grid: &mut Grid, at: Coord, rng: &mut R) {
    struct Frame {
        cell: Coord,
        dirs: [Compass; 4],
        next: usize,
    }

    let width = grid.width();
    let index = |c: Coord| c.y as usize * width + c.x as usize;
    let mut visited = vec![false; width * grid.height()];
    let mut stack: Vec<Frame> = Vec::new();

    let mut dirs = Compass::ALL;
    dirs.shuffle(rng);
    visited[index(at)] = true;
    stack.push(Frame { cell: at, dirs, next: 0 });

    while let Some(frame) = stack.last_mut() {
        if frame.next == 4 {
            stack.pop();
            continue;
        }
        let dir = frame.dirs[frame.next];
        frame.next += 1;
        let cell = frame.cell;

        let (dx, dy) = dir.carve_step();
        let target = Coord::new(cell.x + dx, cell.y + dy);
        // solo cuartos sin visitar; is_open ya cubre los límites
        if !grid.is_open(target) || visited[index(target)] {
            continue;
        }
        let (mx, my) = dir.map_step();
        grid.carve(cell.x + mx, cell.y + my);
        visited[index(target)] = true;
        let mut dirs = Compass::ALL;
        dirs.shuffle(rng);
        stack.push(Frame { cell: target, dirs, next: 0 });
    }
}

/// Meta: primera celda abierta tras barajar. Inicio: la *última* celda cuya
/// suma `x+y` se aleja de la de la meta por más de `width/2`. No es el
/// punto más lejano, solo evita spawns pegados; si ninguna pasa el umbral
/// (mazes diminutos) cae a la última barajada.
fn pick_points<R: Rng>(grid: &Grid, rng: &mut R) -> (Coord, Coord) {
    let mut open: Vec<Coord> = Vec::new();
    for x in 0..grid.width() as i32 {
        for y in 0..grid.height() as i32 {
            if grid.get(x, y) == Cell::Open {
                open.push(Coord::new(x, y));
            }
        }
    }
    open.shuffle(rng);

    let goal = open[0];
    let goal_range = goal.x + goal.y;
    let threshold = (grid.width() / 2) as i32;
    let mut start = open[open.len() - 1];
    for &candidate in &open[1..] {
        if (candidate.x + candidate.y - goal_range).abs() > threshold {
            start = candidate;
        }
    }
    (start, goal)
}
