/// Fixed ordered palette; colors are assigned by position and reused cyclically
pub(crate) const PALETTE: [&str; 10] = [
    "#D97757", "#6A9BCC", "#788C5D", "#C46686", "#E5B567", "#8B7EC8", "#4FA3A5", "#B8860B",
    "#CC785C", "#7D8590",
];

pub(crate) fn color_at(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

pub(crate) fn colors_for(count: usize) -> Vec<String> {
    (0..count).map(|i| color_at(i).to_string()).collect()
}
