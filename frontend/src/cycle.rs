/// Which way a cyclic index moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Moves `index` one step in `direction`, wrapping at both ends.
/// Returns `None` when there is nothing to cycle over.
pub fn step(index: usize, count: usize, direction: Direction) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let index = index % count;
    Some(match direction {
        Direction::Forward => (index + 1) % count,
        Direction::Backward => (index + count - 1) % count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_backward_from_zero() {
        assert_eq!(step(0, 5, Direction::Backward), Some(4));
    }

    #[test]
    fn wraps_forward_from_last() {
        assert_eq!(step(4, 5, Direction::Forward), Some(0));
    }

    #[test]
    fn empty_has_no_step() {
        assert_eq!(step(0, 0, Direction::Forward), None);
        assert_eq!(step(3, 0, Direction::Backward), None);
    }

    #[test]
    fn single_item_stays_put() {
        assert_eq!(step(0, 1, Direction::Forward), Some(0));
        assert_eq!(step(0, 1, Direction::Backward), Some(0));
    }
}
