use gamedex_db::{open_database, open_memory};

#[test]
fn memory_schema_creates_tables() {
    let conn = open_memory().unwrap();

    let tables: i32 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table'
             AND name IN ('favorites', 'favorite_platforms', 'schema_version')",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(tables, 3);
}

#[test]
fn schema_creation_is_idempotent() {
    let conn = open_memory().unwrap();
    gamedex_db::schema::create_schema(&conn).unwrap();

    let count: i32 = conn
        .query_row("SELECT COUNT(*) FROM favorites", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 0);
}

#[test]
fn open_database_creates_and_reopens() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("favorites.db");

    {
        let conn = open_database(&path).unwrap();
        conn.execute(
            "INSERT INTO favorites (id, name, slug) VALUES (1, 'Celeste', 'celeste')",
            [],
        )
        .unwrap();
    }

    let conn = open_database(&path).unwrap();
    let name: String = conn
        .query_row("SELECT name FROM favorites WHERE id = 1", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(name, "Celeste");
}
