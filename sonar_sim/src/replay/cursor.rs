// sonar_sim/src/replay/cursor.rs

use bevy::prelude::Resource;

/// Index of the frame currently on display. Frames are only ever visited in
/// increasing order, one at a time; the only way back is a restart.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackCursor {
    frame: usize,
    frame_count: usize,
}

impl PlaybackCursor {
    pub fn new(frame_count: usize) -> Self {
        Self {
            frame: 0,
            frame_count,
        }
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    pub fn is_last(&self) -> bool {
        self.frame + 1 >= self.frame_count
    }

    /// Moves to the next frame. Returns `false` and stays put on the last one.
    pub fn advance(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.frame += 1;
        true
    }

    pub fn restart(&mut self) {
        self.frame = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visits_every_frame_once_then_stops() {
        let mut cursor = PlaybackCursor::new(3);
        let mut visited = vec![cursor.frame()];
        while cursor.advance() {
            visited.push(cursor.frame());
        }
        assert_eq!(visited, vec![0, 1, 2]);
        assert!(cursor.is_last());
        assert!(!cursor.advance());
        assert_eq!(cursor.frame(), 2);
    }

    #[test]
    fn single_frame_log_is_immediately_last() {
        let mut cursor = PlaybackCursor::new(1);
        assert!(cursor.is_last());
        assert!(!cursor.advance());
    }

    #[test]
    fn restart_returns_to_the_first_frame() {
        let mut cursor = PlaybackCursor::new(5);
        cursor.advance();
        cursor.advance();
        cursor.restart();
        assert_eq!(cursor.frame(), 0);
        assert_eq!(cursor.frame_count(), 5);
    }
}
