use rand::Rng;

const ADJECTIVES: &[&str] = &[
    "calm", "sharp", "lucky", "steady", "bright", "quiet", "rapid", "patient",
    "daring", "crafty", "stubborn", "fearless",
];

const NOUNS: &[&str] = &[
    "grid", "line", "corner", "center", "edge", "cross", "nought", "row",
    "column", "diagonal",
];

pub fn generate_session_id() -> String {
    let mut rng = rand::rng();
    let adjective = ADJECTIVES[rng.random_range(0..ADJECTIVES.len())];
    let noun = NOUNS[rng.random_range(0..NOUNS.len())];
    format!("{}-{}-{:03}", adjective, noun, rng.random_range(0..1000))
}
