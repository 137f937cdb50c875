//! Demo data loaded by `Store::seeded`.

/// `(name)` for each seeded user, in id order.
pub const USERS: &[&str] = &["John Doe", "Jane Doe"];

/// `(title, content, author id)` for each seeded post, in id order.
pub const POSTS: &[(&str, &str, &str)] = &[
    ("Post 1", "Content 1", "1"),
    ("Post 2", "Content 2", "1"),
    ("Post 3", "Content 3", "2"),
];
