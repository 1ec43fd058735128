mod logging_connection;
pub use logging_connection::LoggingConnection;

pub mod models;

use rowbind::driver::sqlite::Sqlite;

const SCHEMA: &str = "
CREATE TABLE users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    karma REAL,
    suspended INTEGER DEFAULT 0
);

CREATE TABLE tweets (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER NOT NULL REFERENCES users (id) ON DELETE CASCADE,
    message TEXT,
    retweets INTEGER,
    created TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
);

INSERT INTO users (id, name) VALUES (1, 'Oliver');
INSERT INTO users (id, name) VALUES (2, 'Sandra');

INSERT INTO tweets (id, user_id, message, retweets) VALUES (1, 1, 'Google Go rocks', 179);
INSERT INTO tweets (id, user_id, message, retweets) VALUES (2, 1, '... so does Google Maps', 19);
INSERT INTO tweets (id, user_id, message, retweets) VALUES (3, 2, 'Holidays! Yay!', 1);
";

/// Opens a fresh in-memory database with the seeded `users` and `tweets` tables.
pub fn setup() -> LoggingConnection {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut connection = Sqlite::in_memory().connect().unwrap();
    connection.execute_batch(SCHEMA).unwrap();

    LoggingConnection::new(Box::new(connection))
}
