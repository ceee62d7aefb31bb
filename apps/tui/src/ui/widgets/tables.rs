pub const fn scroll_offset(
    total_rows: usize,
    max_visible_rows: usize,
    selected_index: usize,
) -> usize {
    if total_rows <= max_visible_rows {
        return 0;
    }

    if selected_index >= max_visible_rows {
        return selected_index - max_visible_rows + 1;
    }

    0
}

/// Shared table title: `" Modules (3/17) "` style shown/total counter.
pub fn list_title(label: &str, shown: usize, total: usize) -> String {
    if shown == total {
        format!(" {label} ({total}) ")
    } else {
        format!(" {label} ({shown}/{total}) ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_keeps_the_selection_visible() {
        assert_eq!(scroll_offset(10, 20, 5), 0);
        assert_eq!(scroll_offset(30, 10, 9), 0);
        assert_eq!(scroll_offset(30, 10, 15), 6);
    }

    #[test]
    fn title_collapses_when_nothing_is_filtered_out() {
        assert_eq!(list_title("Modules", 17, 17), " Modules (17) ");
        assert_eq!(list_title("Modules", 3, 17), " Modules (3/17) ");
    }
}
