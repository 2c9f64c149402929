//! Layer-by-layer solver.
//!
//! The solver works with the front face as its first layer: it builds a cross
//! on the front, fills the front corners, then the middle ring, and finally
//! turns the cube over (`X X`) to finish the last layer. Pieces are tracked by
//! [`PieceId`], so a handle found at the start of a phase keeps pointing at the
//! same physical piece while the moves shuffle it around.
//!
//! Every primitive move applied to the cube is recorded; replaying the record
//! on a copy of the input cube solves it.

use log::{debug, trace};
use strum::{Display, VariantArray};

use crate::cube::{Cube, Face, PieceId};
use crate::errors::SolveError;
use crate::geometry::{Axis, Vector3i, DOWN, LEFT, RIGHT, UP};
use crate::moves::Move::{self, *};
use crate::pieces::Color;

/// Upper bound on the repetitions of any search loop.
///
/// A valid cube never needs more than four turns of one face to line up a
/// piece, so hitting the cap means the input cannot be solved.
const MAX_REPEATS: usize = 10;

// cross: bring a back-layer edge to the front on the left or right side
const CROSS_LEFT: &[Move] = &[L, L];
const CROSS_LEFT_FLIPPED: &[Move] = &[E, L, Ei, Li];
const CROSS_RIGHT: &[Move] = &[R, R];
const CROSS_RIGHT_FLIPPED: &[Move] = &[Ei, R, E, Ri];

// cross corners: drop a corner from (1,-1,-1) into (1,-1,1)
const CORNER_FRONT_ON_X: &[Move] = &[B, D, Bi, Di];
const CORNER_FRONT_ON_Y: &[Move] = &[Bi, Ri, B, R];
const CORNER_FRONT_ON_Z: &[Move] = &[Ri, B, B, R, Bi, Bi, D, Bi, Di];

// second layer: insert the back edge into the left-down slot
const INSERT_FROM_LEFT: &[Move] = &[B, L, Bi, Li, Bi, Di, B, D];
const INSERT_FROM_DOWN: &[Move] = &[Bi, Di, B, D, B, L, Bi, Li];

const TURN_OVER: &[Move] = &[X, X];
const TURN_BACK: &[Move] = &[Xi, Xi];

// back face edges: orient the last-layer edges, forming a cross
const EDGES_FROM_CORNER: &[Move] = &[D, F, R, Fi, Ri, Di];
const EDGES_FROM_LINE: &[Move] = &[D, R, F, Ri, Fi, Di];

// last layer corners: two three-cycles of corner positions
const CORNER_SWAP_1: &[Move] = &[Li, Fi, L, D, F, Di, Li, F, L, F, F];
const CORNER_SWAP_2: &[Move] = &[F, Li, Fi, L, D, F, Di, Li, F, L, F];

const CORNER_TWIST: &[Move] = &[Ri, Bi, R, B, Ri, Bi, R, B];

// last layer edges: keeps the top edge and cycles right -> left -> bottom
const EDGE_CYCLE: &[Move] = &[R, Fi, R, F, R, F, R, Fi, Ri, Fi, R, R];
// flips the top and bottom edges in place
const EDGE_FLIP: &[Move] = &[Mi, F, Mi, F, Mi, F, F, M, F, M, F, M, F, F];

const TOP: Vector3i = Vector3i::new(0, 1, 1);
const BOTTOM: Vector3i = Vector3i::new(0, -1, 1);
const LEFT_EDGE: Vector3i = Vector3i::new(-1, 0, 1);
const RIGHT_EDGE: Vector3i = Vector3i::new(1, 0, 1);

/// A stage of the layer-by-layer method, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, VariantArray)]
#[strum(serialize_all = "snake_case")]
pub enum Phase {
    Cross,
    CrossCorners,
    SecondLayer,
    BackFaceEdges,
    LastLayerCornersPosition,
    LastLayerCornersOrientation,
    LastLayerEdges,
}

/// Solves one cube in place, recording every move it applies.
pub struct Solver<'a> {
    cube: &'a mut Cube,
    moves: Vec<Move>,
    phases: Vec<(Phase, usize)>,
    phase: Phase,
    left: (PieceId, Color),
    right: (PieceId, Color),
    up: (PieceId, Color),
    down: (PieceId, Color),
}

impl<'a> Solver<'a> {
    /// Captures the left, right, up and down centers as references.
    pub fn new(cube: &'a mut Cube) -> Result<Self, SolveError> {
        let center = |color: Color| {
            cube.find_piece(&[color])
                .map(|id| (id, color))
                .ok_or_else(|| SolveError::PieceNotFound {
                    phase: Phase::Cross,
                    colors: vec![color],
                })
        };
        let left = center(cube.left_color())?;
        let right = center(cube.right_color())?;
        let up = center(cube.up_color())?;
        let down = center(cube.down_color())?;

        Ok(Self {
            cube,
            moves: Vec::new(),
            phases: Vec::new(),
            phase: Phase::Cross,
            left,
            right,
            up,
            down,
        })
    }

    /// Every move applied so far, in order.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// How many moves each finished phase applied.
    pub fn phases(&self) -> &[(Phase, usize)] {
        &self.phases
    }

    pub fn cube(&self) -> &Cube {
        self.cube
    }

    /// Runs every phase, then checks that the cube ended up solved.
    ///
    /// On error the cube is left as it was when the failing phase gave up.
    pub fn solve(&mut self) -> Result<(), SolveError> {
        for &phase in Phase::VARIANTS {
            self.run_phase(phase)?;
        }
        if !self.cube.is_solved() {
            return Err(SolveError::Unsolved {
                cube: self.cube.to_string(),
            });
        }
        Ok(())
    }

    /// Runs a single phase. Phases expect their predecessors to have run.
    pub fn run_phase(&mut self, phase: Phase) -> Result<(), SolveError> {
        self.phase = phase;
        let before = self.moves.len();

        match phase {
            Phase::Cross => self.cross()?,
            Phase::CrossCorners => self.cross_corners()?,
            Phase::SecondLayer => self.second_layer()?,
            Phase::BackFaceEdges => self.back_face_edges()?,
            Phase::LastLayerCornersPosition => self.last_layer_corners_position()?,
            Phase::LastLayerCornersOrientation => self.last_layer_corners_orientation()?,
            Phase::LastLayerEdges => self.last_layer_edges()?,
        }

        let applied = self.moves.len() - before;
        self.phases.push((phase, applied));
        debug!("{phase}: {applied} moves, {} total", self.moves.len());
        trace!("after {phase}:\n{}", self.cube);
        Ok(())
    }

    fn turn(&mut self, mv: Move) {
        self.cube.apply(mv);
        self.moves.push(mv);
    }

    fn apply(&mut self, moves: &[Move]) {
        self.cube.apply_all(moves);
        self.moves.extend_from_slice(moves);
    }

    /// Turns `mv` until `done` holds, returning how many turns it took.
    fn repeat_until(
        &mut self,
        mv: Move,
        done: impl Fn(&Self) -> bool,
    ) -> Result<usize, SolveError> {
        let mut count = 0;
        while !done(self) {
            if count == MAX_REPEATS {
                return Err(self.stuck());
            }
            self.turn(mv);
            count += 1;
        }
        Ok(count)
    }

    #[inline]
    fn position(&self, id: PieceId) -> Vector3i {
        self.cube[id].position()
    }

    fn color(&self, id: PieceId, axis: Axis) -> Option<Color> {
        self.cube[id].color(axis)
    }

    fn find(&self, colors: &[Color]) -> Result<PieceId, SolveError> {
        self.cube
            .find_piece(colors)
            .ok_or_else(|| SolveError::PieceNotFound {
                phase: self.phase,
                colors: colors.to_vec(),
            })
    }

    /// The clockwise and counter-clockwise turns of the face at `normal`.
    fn face_turns(&self, normal: Vector3i) -> Result<(Move, Move), SolveError> {
        Face::from_normal(normal)
            .map(Move::face_turns)
            .ok_or_else(|| self.invariant(format!("{normal} is not a face")))
    }

    /// Returns `true` if the piece at `position` shows the front color on z.
    fn shows_front(&self, position: Vector3i) -> bool {
        self.cube[position].color(Axis::Z) == Some(self.cube.front_color())
    }

    fn stuck(&self) -> SolveError {
        SolveError::Stuck {
            phase: self.phase,
            cube: self.cube.to_string(),
        }
    }

    fn invariant(&self, detail: String) -> SolveError {
        SolveError::Invariant {
            phase: self.phase,
            detail,
        }
    }

    fn expect_at(&self, id: PieceId, position: Vector3i) -> Result<(), SolveError> {
        if self.position(id) == position {
            Ok(())
        } else {
            Err(self.invariant(format!(
                "expected {} at {position}, found it at {}",
                self.cube[id],
                self.position(id)
            )))
        }
    }

    fn cross(&mut self) -> Result<(), SolveError> {
        let front = self.cube.front_color();
        let fl = self.find(&[front, self.cube.left_color()])?;
        let fr = self.find(&[front, self.cube.right_color()])?;
        let fu = self.find(&[front, self.cube.up_color()])?;
        let fd = self.find(&[front, self.cube.down_color()])?;

        let left_color = self.cube.left_color();
        self.cross_edge(fl, self.left.0, left_color, CROSS_LEFT, CROSS_LEFT_FLIPPED)?;
        let right_color = self.cube.right_color();
        self.cross_edge(fr, self.right.0, right_color, CROSS_RIGHT, CROSS_RIGHT_FLIPPED)?;

        // the up and down edges go in on the sides, after a quarter rotation
        self.turn(Z);
        let left_color = self.cube.left_color();
        self.cross_edge(fd, self.down.0, left_color, CROSS_LEFT, CROSS_LEFT_FLIPPED)?;
        let right_color = self.cube.right_color();
        self.cross_edge(fu, self.up.0, right_color, CROSS_RIGHT, CROSS_RIGHT_FLIPPED)?;
        self.turn(Zi);

        Ok(())
    }

    /// Places a front edge next to the center `target`, which must be on the
    /// left or right.
    fn cross_edge(
        &mut self,
        edge: PieceId,
        target: PieceId,
        side_color: Color,
        direct: &[Move],
        flipped: &[Move],
    ) -> Result<(), SolveError> {
        let target = self.position(target);
        let position = self.position(edge);
        if position == Vector3i::new(target.x, target.y, 1)
            && self.color(edge, Axis::Z) == Some(self.cube.front_color())
        {
            return Ok(());
        }

        // send the edge to the back layer
        let mut undo: Vec<Move> = Vec::new();
        match position.z {
            0 => {
                let (cw, cc) = self.face_turns(position.with(Axis::X, 0))?;
                if position == LEFT + UP || position == RIGHT + DOWN {
                    self.turn(cw);
                    undo.push(cc);
                } else {
                    self.turn(cc);
                    undo.push(cw);
                }
            }
            1 => {
                let (cw, cc) = self.face_turns(position.with(Axis::Z, 0))?;
                self.apply(&[cc, cc]);
                if self.position(edge).x != target.x {
                    undo.extend([cw, cw]);
                }
            }
            _ => {}
        }
        if self.position(edge).z != -1 {
            return Err(self.invariant(format!("{} did not reach the back", self.cube[edge])));
        }

        self.repeat_until(B, |s| {
            let p = s.position(edge);
            (p.x, p.y) == (target.x, target.y)
        })?;
        self.apply(&undo);

        if self.color(edge, Axis::X) == Some(side_color) {
            self.apply(direct);
        } else {
            self.apply(flipped);
        }
        Ok(())
    }

    fn cross_corners(&mut self) -> Result<(), SolveError> {
        let front = self.cube.front_color();
        let (left, right) = (self.cube.left_color(), self.cube.right_color());
        let (up, down) = (self.cube.up_color(), self.cube.down_color());
        let frd = self.find(&[front, right, down])?;
        let fru = self.find(&[front, right, up])?;
        let flu = self.find(&[front, left, up])?;
        let fld = self.find(&[front, left, down])?;

        // each corner goes in at right-down, then the cube turns a quarter
        for (corner, right, down) in [
            (frd, self.right.0, self.down.0),
            (fru, self.up.0, self.right.0),
            (flu, self.left.0, self.up.0),
            (fld, self.down.0, self.left.0),
        ] {
            self.cross_corner(corner, right, down)?;
            self.turn(Z);
        }
        Ok(())
    }

    /// Places a front corner between the centers `right` and `down`, which
    /// must sit on the right and down faces.
    fn cross_corner(
        &mut self,
        corner: PieceId,
        right: PieceId,
        down: PieceId,
    ) -> Result<(), SolveError> {
        let position = self.position(corner);
        if position.z == 1 {
            // lift it out to the back with its up or down face, then restore
            let (cw, cc) = self.face_turns(position.with(Axis::X, 0).with(Axis::Z, 0))?;
            let at_back = |s: &Self| s.position(corner).z == -1;
            let mut undo = cc;
            let mut count = self.repeat_until(cw, at_back)?;
            if count > 1 {
                for _ in 0..count {
                    self.turn(cc);
                }
                count = self.repeat_until(cc, at_back)?;
                undo = cw;
            }
            self.turn(B);
            for _ in 0..count {
                self.turn(undo);
            }
        }

        let target = (self.position(right).x, self.position(down).y);
        self.repeat_until(B, |s| {
            let p = s.position(corner);
            (p.x, p.y) == target
        })?;

        let front = Some(self.cube.front_color());
        if self.color(corner, Axis::X) == front {
            self.apply(CORNER_FRONT_ON_X);
        } else if self.color(corner, Axis::Y) == front {
            self.apply(CORNER_FRONT_ON_Y);
        } else {
            self.apply(CORNER_FRONT_ON_Z);
        }
        Ok(())
    }

    fn second_layer(&mut self) -> Result<(), SolveError> {
        let ld = self.find(&[self.left.1, self.down.1])?;
        let rd = self.find(&[self.right.1, self.down.1])?;
        let ru = self.find(&[self.right.1, self.up.1])?;
        let lu = self.find(&[self.left.1, self.up.1])?;

        for edge in [ld, rd, ru, lu] {
            let (left, down) = (self.cube.left_color(), self.cube.down_color());
            self.second_layer_edge(edge, left, down)?;
            self.turn(Z);
        }
        Ok(())
    }

    /// Places a middle-ring edge in the left-down slot.
    fn second_layer_edge(
        &mut self,
        edge: PieceId,
        left: Color,
        down: Color,
    ) -> Result<(), SolveError> {
        if self.position(edge).z == 0 {
            // kick it out of the ring from the left-down slot
            let count = self.repeat_until(Z, |s| {
                let p = s.position(edge);
                (p.x, p.y) == (-1, -1)
            })?;
            self.apply(INSERT_FROM_LEFT);
            for _ in 0..count {
                self.turn(Zi);
            }
        }
        if self.position(edge).z != -1 {
            return Err(self.invariant(format!("{} did not reach the back", self.cube[edge])));
        }

        let back = self.color(edge, Axis::Z);
        if back == Some(left) {
            self.repeat_until(B, |s| s.position(edge).y == -1)?;
            self.apply(INSERT_FROM_LEFT);
        } else if back == Some(down) {
            self.repeat_until(B, |s| s.position(edge).x == -1)?;
            self.apply(INSERT_FROM_DOWN);
        } else {
            return Err(self.invariant(format!(
                "{} belongs to neither {left} nor {down}",
                self.cube[edge]
            )));
        }
        Ok(())
    }

    fn back_face_edges(&mut self) -> Result<(), SolveError> {
        self.apply(TURN_OVER);

        let mut count = 0;
        loop {
            let [top, left, bottom, right] =
                [TOP, LEFT_EDGE, BOTTOM, RIGHT_EDGE].map(|p| self.shows_front(p));
            if top && left && bottom && right {
                break;
            }
            if count == MAX_REPEATS {
                return Err(self.stuck());
            }

            if !(top || left || bottom || right) || (top && left) {
                self.apply(EDGES_FROM_CORNER);
            } else if left && right {
                self.apply(EDGES_FROM_LINE);
            } else {
                self.turn(F);
            }
            count += 1;
        }

        self.apply(TURN_BACK);
        Ok(())
    }

    fn last_layer_corners_position(&mut self) -> Result<(), SolveError> {
        self.apply(TURN_OVER);

        let front = self.cube.front_color();
        let (left, right) = (self.cube.left_color(), self.cube.right_color());
        let (up, down) = (self.cube.up_color(), self.cube.down_color());
        let c1 = self.find(&[front, right, down])?;
        let c2 = self.find(&[front, left, down])?;
        let c3 = self.find(&[front, right, up])?;
        let c4 = self.find(&[front, left, up])?;

        let position = self.position(c4);
        if position == Vector3i::new(1, -1, 1) {
            self.apply(CORNER_SWAP_1);
            self.turn(Zi);
            self.apply(CORNER_SWAP_1);
            self.turn(Z);
        } else if position == Vector3i::new(1, 1, 1) {
            self.turn(Z);
            self.apply(CORNER_SWAP_2);
            self.turn(Zi);
        } else if position == Vector3i::new(-1, -1, 1) {
            self.turn(Zi);
            self.apply(CORNER_SWAP_1);
            self.turn(Z);
        }
        self.expect_at(c4, Vector3i::new(-1, 1, 1))?;

        let position = self.position(c2);
        if position == Vector3i::new(1, 1, 1) {
            self.apply(CORNER_SWAP_2);
            self.apply(CORNER_SWAP_1);
        } else if position == Vector3i::new(1, -1, 1) {
            self.apply(CORNER_SWAP_1);
        }
        self.expect_at(c2, Vector3i::new(-1, -1, 1))?;

        if self.position(c3) == Vector3i::new(1, -1, 1) {
            self.apply(CORNER_SWAP_2);
        }
        self.expect_at(c3, Vector3i::new(1, 1, 1))?;
        self.expect_at(c1, Vector3i::new(1, -1, 1))?;

        self.apply(TURN_BACK);
        Ok(())
    }

    fn last_layer_corners_orientation(&mut self) -> Result<(), SolveError> {
        self.apply(TURN_OVER);

        let slot = Vector3i::new(1, -1, 1);
        for _ in 0..4 {
            let front = Some(self.cube.front_color());
            let corner = self.cube[slot];
            if corner.color(Axis::X) == front {
                self.apply(CORNER_TWIST);
            } else if corner.color(Axis::Y) == front {
                self.apply(CORNER_TWIST);
                self.apply(CORNER_TWIST);
            }
            if !self.shows_front(slot) {
                return Err(self.invariant(format!("{} is still twisted", self.cube[slot])));
            }
            self.turn(F);
        }

        self.apply(TURN_BACK);
        Ok(())
    }

    fn last_layer_edges(&mut self) -> Result<(), SolveError> {
        self.apply(TURN_OVER);
        self.orient_last_edges()?;
        self.permute_last_edges()?;
        self.apply(TURN_BACK);
        Ok(())
    }

    fn orient_last_edges(&mut self) -> Result<(), SolveError> {
        let mut count = 0;
        loop {
            let [top, bottom, left, right] =
                [TOP, BOTTOM, LEFT_EDGE, RIGHT_EDGE].map(|p| !self.shows_front(p));
            if !(top || bottom || left || right) {
                return Ok(());
            }
            if count == MAX_REPEATS {
                return Err(self.stuck());
            }

            if top && bottom {
                self.apply(EDGE_FLIP);
            } else if left && right {
                self.turn(Z);
                self.apply(EDGE_FLIP);
                self.turn(Zi);
            } else {
                self.apply(EDGE_CYCLE);
            }
            count += 1;
        }
    }

    /// Returns `true` if the front edge at `position` matches the center
    /// beside it.
    fn edge_placed(&self, position: Vector3i) -> bool {
        let axis = if position.x == 0 { Axis::Y } else { Axis::X };
        let center = position.with(Axis::Z, 0);
        self.cube[position].color(axis) == self.cube[center].color(axis)
    }

    fn placed_edges(&self) -> usize {
        [TOP, BOTTOM, LEFT_EDGE, RIGHT_EDGE]
            .into_iter()
            .filter(|&p| self.edge_placed(p))
            .count()
    }

    fn permute_last_edges(&mut self) -> Result<(), SolveError> {
        if self.placed_edges() == 0 {
            self.apply(EDGE_CYCLE);
        }

        let mut turns = 0;
        if self.placed_edges() != 4 {
            let placed = self.placed_edges();
            if placed != 1 {
                return Err(self.invariant(format!("{placed} edges placed, expected 1")));
            }
            turns = self.repeat_until(Z, |s| s.edge_placed(TOP))?;

            let mut cycles = 0;
            while self.placed_edges() != 4 {
                if cycles == 2 {
                    return Err(self.invariant("edge cycle did not converge".to_owned()));
                }
                self.apply(EDGE_CYCLE);
                cycles += 1;
            }
        }
        for _ in 0..turns {
            self.turn(Zi);
        }
        Ok(())
    }
}

/// Solves `cube` in place and returns the moves applied.
pub fn solve(cube: &mut Cube) -> Result<Vec<Move>, SolveError> {
    let mut solver = Solver::new(cube)?;
    solver.solve()?;
    Ok(solver.moves)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::moves;

    const SOLVED: &str = "UUUUUUUUULLLFFFRRRBBBLLLFFFRRRBBBLLLFFFRRRBBBDDDDDDDDD";
    const SCRAMBLED: &str = "DLURRDFFUBBLDDRBRBLDLRBFRUULFBDDUFBRBBRFUDFLUDLUULFLFR";

    fn cube(stickers: &str) -> Cube {
        Cube::new(stickers).unwrap()
    }

    /// Solves `start` and checks the recorded moves replay to a solved cube.
    fn solve_and_replay(start: &Cube) -> Vec<Move> {
        let mut solved = start.clone();
        let moves = solve(&mut solved).unwrap_or_else(|e| panic!("{e}"));
        assert!(solved.is_solved());

        let mut replay = start.clone();
        replay.apply_all(&moves);
        assert!(replay.is_solved());
        assert_eq!(replay, solved);
        moves
    }

    #[test_log::test]
    fn test_phases_of_example_cube() {
        let expected = [
            (Phase::Cross, "DFFDRRBRLRLDLUUBFLDDBFBBUUUFFBDDLURFRURURFLBFDLBDLBRLU", 23),
            (Phase::CrossCorners, "FRBRRLRRRDFBUUUFBRDDLFBBUUUFFRBDLRDBUUUFBDBDFLLLLLDDFL", 50),
            (Phase::SecondLayer, "DLBRRRRRRFBBUUUFFDLDRDBBUUUFFRDDFDBBUUUFFBDBFLLLLLLLDR", 116),
            (Phase::BackFaceEdges, "LFBRRRRRRFBBUUUFFRDDDRBBUUUFFLDDDRBBUUUFFBLDFLLLLLLDBD", 128),
            (
                Phase::LastLayerCornersPosition,
                "DDRRRRRRRRBBUUUFFFDRBLBBUUUFFDBDDBBBUUUFFDLDDLLLLLLLFF",
                167,
            ),
            (
                Phase::LastLayerCornersOrientation,
                "RDRRRRRRRBBBUUUFFFDRDLBBUUUFFDBDDBBBUUUFFFDDDLLLLLLLFL",
                199,
            ),
            (Phase::LastLayerEdges, "RRRRRRRRRBBBUUUFFFDDDBBBUUUFFFDDDBBBUUUFFFDDDLLLLLLLLL", 257),
        ];

        let mut cube = cube(SCRAMBLED);
        let mut solver = Solver::new(&mut cube).unwrap();
        for (phase, stickers, total) in expected {
            solver.run_phase(phase).unwrap();
            assert_eq!(solver.cube().flat_str(), stickers, "after {phase}");
            assert_eq!(solver.moves().len(), total, "after {phase}");
        }
        assert!(solver.cube().is_solved());
    }

    #[test]
    fn test_example_solution_snapshot() {
        let moves = solve_and_replay(&cube(SCRAMBLED));
        insta::assert_snapshot!(moves::format(&moves));
    }

    #[test]
    fn test_solved_input_stays_solved() {
        let start = cube(SOLVED);
        let moves = solve_and_replay(&start);
        assert_eq!(moves.len(), 256);
    }

    #[test_log::test]
    fn test_known_scrambles() {
        let scrambles = [
            ("Di R L F Ri L U U F D D Ri L L F F D R R B B D D L L Ui B B Ui", 241),
            ("Ui F B Ri U Ri Fi D D L R Ui F F L L Ui D L L Ui B B Ui", 284),
            ("F Ui F F Di B L L F D D B U U B B U U L B R F F Ui L R R", 253),
            ("R R F F L L Fi U U Bi D D B B L U F F Li Ri U Ri U Ri U L", 290),
            ("F F Di B B Di B B R R U U Ri Di R R D B B R R B B Fi Di Fi Li", 251),
            ("Ri U B U U R R Fi Ri Fi Ui L L U F F Ui Di Fi L L D D", 235),
        ];
        for (scramble, length) in scrambles {
            let mut start = cube(SOLVED);
            start.sequence(scramble).unwrap();
            assert_eq!(solve_and_replay(&start).len(), length, "{scramble}");
        }
    }

    #[test]
    fn test_random_scrambles() {
        let mut rng = fastrand::Rng::with_seed(0x5eed);
        for _ in 0..200 {
            let length = rng.usize(1..40);
            let mut start = cube(SOLVED);
            start.apply_all(&moves::scramble(length, &mut rng));
            solve_and_replay(&start);
        }
    }

    #[test]
    fn test_slice_and_rotation_scrambles() {
        let mut rng = fastrand::Rng::with_seed(42);
        for _ in 0..100 {
            let mut start = cube(SOLVED);
            for _ in 0..25 {
                start.apply(Move::VARIANTS[rng.usize(..Move::VARIANTS.len())]);
            }
            solve_and_replay(&start);
        }
    }

    #[test]
    fn test_other_color_letters() {
        let mut start = cube(&SOLVED.replace('U', "w").replace('D', "y"));
        start.sequence("R U Ri Ui F F M E S").unwrap();
        solve_and_replay(&start);
    }

    #[test_log::test]
    fn test_flipped_edge_gets_stuck() {
        let mut stickers: Vec<char> = SOLVED.chars().collect();
        stickers.swap(1, 19);
        let mut cube = cube(&stickers.into_iter().collect::<String>());

        let mut solver = Solver::new(&mut cube).unwrap();
        let err = solver.solve().unwrap_err();
        assert!(
            matches!(err, SolveError::Stuck { phase: Phase::BackFaceEdges, .. }),
            "{err:?}"
        );
        assert_eq!(solver.moves().len(), 180);
    }

    #[test]
    fn test_twisted_corner_is_unsolved() {
        let mut stickers: Vec<char> = SOLVED.chars().collect();
        stickers[9] = 'U';
        stickers[0] = 'B';
        stickers[20] = 'L';
        let mut cube = cube(&stickers.into_iter().collect::<String>());

        let err = solve(&mut cube).unwrap_err();
        assert!(matches!(err, SolveError::Unsolved { .. }), "{err:?}");
        assert!(!cube.is_solved());
    }

    #[test]
    fn test_missing_piece_is_reported() {
        let mut stickers: Vec<char> = SOLVED.chars().collect();
        stickers[7] = 'Q';
        let mut cube = cube(&stickers.into_iter().collect::<String>());

        let err = solve(&mut cube).unwrap_err();
        assert_eq!(
            err,
            SolveError::PieceNotFound {
                phase: Phase::Cross,
                colors: vec!['F', 'U'],
            }
        );
    }

    #[test]
    fn test_phase_names() {
        assert_eq!(Phase::Cross.to_string(), "cross");
        assert_eq!(
            Phase::LastLayerCornersOrientation.to_string(),
            "last_layer_corners_orientation"
        );
        assert_eq!(Phase::VARIANTS.len(), 7);
    }
}
