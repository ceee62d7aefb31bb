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

/// Clamped list navigation shared by the table screens.
pub fn move_selection(selected: &mut usize, total: usize, delta: isize) {
    if total == 0 {
        *selected = 0;
        return;
    }

    let next = if delta.is_negative() {
        selected.saturating_sub(delta.unsigned_abs())
    } else {
        selected.saturating_add(delta.unsigned_abs())
    };
    *selected = next.min(total - 1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapping_handles_empty_and_boundaries() {
        assert_eq!(wrap_increment(0, 0), 0);
        assert_eq!(wrap_increment(2, 3), 0);
        assert_eq!(wrap_decrement(0, 3), 2);
    }

    #[test]
    fn selection_moves_are_clamped() {
        let mut selected = 1;
        move_selection(&mut selected, 4, 5);
        assert_eq!(selected, 3);
        move_selection(&mut selected, 4, -10);
        assert_eq!(selected, 0);
        move_selection(&mut selected, 0, 1);
        assert_eq!(selected, 0);
    }
}
