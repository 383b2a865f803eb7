/// Colors for tenants and endpoints, picked by position in the run layout.
/// Priority classes have their own fixed colors, none of which appear here.
const ACTOR_COLORS: [&str; 8] = [
    "green", "red", "purple", "brown", "teal", "olive", "navy", "magenta",
];

pub fn actor_color(position: usize) -> &'static str {
    ACTOR_COLORS[position % ACTOR_COLORS.len()]
}
