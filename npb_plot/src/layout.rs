/// Fraction of each group's width occupied by its bars.
const GROUP_WIDTH: f64 = 0.8;

/// Positions of `count` groups (or bars) on the x axis.
pub fn positions(count: usize) -> Vec<f64> {
    (0..count).map(|i| i as f64).collect()
}

/// Width of each bar when `bars_per_group` bars share a group.
pub fn bar_width(bars_per_group: usize) -> f64 {
    if bars_per_group == 0 {
        return GROUP_WIDTH;
    }
    GROUP_WIDTH / bars_per_group as f64
}

/// Shift of each bar with respect to its group's position, so that the bars of
/// a group are centered on it.
pub fn bar_offsets(bars_per_group: usize) -> Vec<f64> {
    let width = bar_width(bars_per_group);
    // we need to shift all to the left by half of the number of bars
    let shift_left = bars_per_group as f64 / 2.0;
    // we also need to shift half bar to the right
    let shift_right = 0.5;
    (0..bars_per_group)
        .map(|index| (index as f64 - shift_left + shift_right) * width)
        .collect()
}

/// Height at which the label of a bar with height `value` is drawn: slightly
/// above the bar, by `ratio` of the tallest bar.
pub fn label_height(value: f64, max: f64, ratio: f64) -> f64 {
    value + max * ratio
}

/// Largest value in `values` (zero if empty).
pub fn max(values: &[f64]) -> f64 {
    values.iter().copied().fold(0.0, f64::max)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[quickcheck]
    fn offsets_are_centered(bars: u8) -> bool {
        let bars = bars as usize;
        let offsets = bar_offsets(bars);
        let sum: f64 = offsets.iter().sum();
        offsets.len() == bars && sum.abs() < 1e-9
    }

    #[quickcheck]
    fn groups_do_not_overlap(bars: u8) -> bool {
        // the outer edges of a group stay within half a unit of its position
        let bars = bars as usize;
        let width = bar_width(bars);
        bar_offsets(bars)
            .iter()
            .all(|offset| offset.abs() + width / 2.0 <= 0.5 + 1e-9)
    }
}
