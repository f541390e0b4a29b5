/// Map a raw score onto a 0-100 integer percentage against the precomputed
/// theoretical ceiling. Scores above the ceiling pin at 100 rather than
/// overflowing the scale.
pub(crate) fn normalize(raw: i32, ceiling: i32) -> u8 {
    if ceiling <= 0 {
        return 0;
    }

    let percent = f64::from(raw.max(0)) / f64::from(ceiling) * 100.0;
    percent.round().clamp(0.0, 100.0) as u8
}
