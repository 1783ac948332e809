pub const fn wrap_decrement(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    if index == 0 {
        len - 1
    } else {
        index - 1
    }
}

pub const fn wrap_increment(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    (index + 1) % len
}

/// Moves `index` by `delta` without leaving `0..len`.
pub fn clamped_offset(index: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    index.saturating_add_signed(delta).min(len - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapping_moves_around_both_ends() {
        assert_eq!(wrap_increment(2, 3), 0);
        assert_eq!(wrap_decrement(0, 3), 2);
        assert_eq!(wrap_increment(0, 0), 0);
    }

    #[test]
    fn clamped_offset_stops_at_the_edges() {
        assert_eq!(clamped_offset(1, -5, 4), 0);
        assert_eq!(clamped_offset(1, 5, 4), 3);
        assert_eq!(clamped_offset(0, 1, 0), 0);
    }
}
