//! Seed script for development: populates a fresh database with sample data.
//!
//! Usage: `cargo run --bin seed`
//!
//! Requires the `DATABASE_URL` environment variable (reads .env). Every step
//! is skipped when its table already has rows, so the script can be rerun.

use anyhow::anyhow;
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use bookreview::config::AppConfig;
use bookreview::models::user::{ACCESS_LEVEL_ADMIN, ACCESS_LEVEL_READER};
use chrono::NaiveDate;
use sqlx::PgPool;

const ADMIN_PASSWORD: &str = "Admin123!";
const READER_PASSWORD: &str = "reader123";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    let pool = bookreview::db::create_pool(&config).await?;

    // Run migrations first
    sqlx::migrate!("./migrations").run(&pool).await?;

    println!("=== Book Review Seed Script ===");

    seed_users(&pool).await?;
    seed_publishers(&pool).await?;
    seed_authors(&pool).await?;
    seed_taxonomy(&pool).await?;
    seed_books(&pool).await?;
    seed_book_relations(&pool).await?;
    seed_reader_activity(&pool).await?;

    println!("\n=== Seed complete! ===");
    println!("Admin login: admin / {ADMIN_PASSWORD}");

    Ok(())
}

fn hash_password(password: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| anyhow!("Password hashing failed: {e}"))
}

async fn table_count(pool: &PgPool, table: &str) -> anyhow::Result<i64> {
    let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await?;
    Ok(count)
}

async fn seed_users(pool: &PgPool) -> anyhow::Result<()> {
    let count = table_count(pool, "users").await?;
    if count > 0 {
        println!("[skip] Users already exist ({count})");
        return Ok(());
    }

    let users = [
        ("Site", "Admin", "admin", "admin@bookreview.local", ADMIN_PASSWORD, ACCESS_LEVEL_ADMIN),
        ("Ada", "Lovelace", "ada", "ada@bookreview.local", READER_PASSWORD, ACCESS_LEVEL_READER),
        ("Alan", "Turing", "alan", "alan@bookreview.local", READER_PASSWORD, ACCESS_LEVEL_READER),
        ("Grace", "Hopper", "grace", "grace@bookreview.local", READER_PASSWORD, ACCESS_LEVEL_READER),
    ];

    for (first_name, last_name, username, email, password, access_level) in users {
        sqlx::query(
            "INSERT INTO users (first_name, last_name, username, email, password, access_level)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(first_name)
        .bind(last_name)
        .bind(username)
        .bind(email)
        .bind(hash_password(password)?)
        .bind(access_level)
        .execute(pool)
        .await?;
    }

    println!("[done] Created admin and 3 reader accounts");
    Ok(())
}

async fn seed_publishers(pool: &PgPool) -> anyhow::Result<()> {
    let count = table_count(pool, "publishers").await?;
    if count > 0 {
        println!("[skip] Publishers already exist ({count})");
        return Ok(());
    }

    let publishers = [
        ("Chilton Books", "www.chilton.com", 1904),
        ("Gnome Press", "www.gnomepress.com", 1948),
        ("Ace Books", "www.acebooks.com", 1952),
        ("Penguin Books", "www.penguin.co.uk", 1935),
    ];

    for (name, website, established) in publishers {
        sqlx::query(
            "INSERT INTO publishers (name, email, website, established_date)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(name)
        .bind(format!("contact@{}", website.trim_start_matches("www.")))
        .bind(website)
        .bind(established)
        .execute(pool)
        .await?;
    }

    println!("[done] Created {} publishers", publishers.len());
    Ok(())
}

async fn seed_authors(pool: &PgPool) -> anyhow::Result<()> {
    let count = table_count(pool, "authors").await?;
    if count > 0 {
        println!("[skip] Authors already exist ({count})");
        return Ok(());
    }

    let authors = [
        ("Frank", "Herbert", "United States", 1920),
        ("Isaac", "Asimov", "Russia", 1920),
        ("Ursula", "Le Guin", "United States", 1929),
        ("George", "Orwell", "India", 1903),
        ("Octavia", "Butler", "United States", 1947),
    ];

    for (first_name, last_name, country, born) in authors {
        sqlx::query(
            "INSERT INTO authors (first_name, last_name, country_of_origin, date_of_birth)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(first_name)
        .bind(last_name)
        .bind(country)
        .bind(born)
        .execute(pool)
        .await?;
    }

    println!("[done] Created {} authors", authors.len());
    Ok(())
}

async fn seed_taxonomy(pool: &PgPool) -> anyhow::Result<()> {
    for genre in ["Science Fiction", "Fantasy", "Dystopia", "Classics"] {
        sqlx::query("INSERT INTO genres (title) VALUES ($1) ON CONFLICT (title) DO NOTHING")
            .bind(genre)
            .execute(pool)
            .await?;
    }

    for language in ["English", "Spanish", "French"] {
        sqlx::query("INSERT INTO languages (language) VALUES ($1) ON CONFLICT (language) DO NOTHING")
            .bind(language)
            .execute(pool)
            .await?;
    }

    println!("[done] Genres and languages present");
    Ok(())
}

async fn seed_books(pool: &PgPool) -> anyhow::Result<()> {
    let count = table_count(pool, "books").await?;
    if count > 0 {
        println!("[skip] Books already exist ({count})");
        return Ok(());
    }

    // (title, isbn, published, publisher)
    let books = [
        ("Dune", 9780441013593_i64, (1965, 8, 1), Some("Chilton Books")),
        ("Dune Messiah", 9780593098233, (1969, 10, 15), Some("Ace Books")),
        ("Foundation", 9780553293357, (1951, 6, 1), Some("Gnome Press")),
        ("I, Robot", 9780553382563, (1950, 12, 2), Some("Gnome Press")),
        ("The Left Hand of Darkness", 9780441478125, (1969, 3, 1), Some("Ace Books")),
        ("Nineteen Eighty-Four", 9780451524935, (1949, 6, 8), Some("Penguin Books")),
        ("Kindred", 9780807083697, (1979, 6, 1), None),
    ];

    for (title, isbn, (year, month, day), publisher) in books {
        let published = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| anyhow!("invalid publish date for {title}"))?;
        sqlx::query(
            "INSERT INTO books (title, isbn, published_date, publisher_id)
             VALUES ($1, $2, $3, (SELECT id FROM publishers WHERE name = $4))",
        )
        .bind(title)
        .bind(isbn)
        .bind(published)
        .bind(publisher)
        .execute(pool)
        .await?;
    }

    println!("[done] Created {} books", books.len());
    Ok(())
}

async fn seed_book_relations(pool: &PgPool) -> anyhow::Result<()> {
    let count = table_count(pool, "book_authors").await?;
    if count > 0 {
        println!("[skip] Book relations already exist ({count})");
        return Ok(());
    }

    // (book title, author last name, genre, language)
    let relations = [
        ("Dune", "Herbert", "Science Fiction", "English"),
        ("Dune Messiah", "Herbert", "Science Fiction", "English"),
        ("Foundation", "Asimov", "Science Fiction", "English"),
        ("I, Robot", "Asimov", "Science Fiction", "Spanish"),
        ("The Left Hand of Darkness", "Le Guin", "Fantasy", "English"),
        ("Nineteen Eighty-Four", "Orwell", "Dystopia", "French"),
        ("Kindred", "Butler", "Classics", "English"),
    ];

    for (book, author, genre, language) in relations {
        sqlx::query(
            "INSERT INTO book_authors (book_id, author_id)
             SELECT b.id, a.id FROM books b, authors a WHERE b.title = $1 AND a.last_name = $2",
        )
        .bind(book)
        .bind(author)
        .execute(pool)
        .await?;

        sqlx::query(
            "INSERT INTO book_genres (book_id, genre_id)
             SELECT b.id, g.id FROM books b, genres g WHERE b.title = $1 AND g.title = $2",
        )
        .bind(book)
        .bind(genre)
        .execute(pool)
        .await?;

        sqlx::query(
            "INSERT INTO book_languages (book_id, language_id)
             SELECT b.id, l.id FROM books b, languages l WHERE b.title = $1 AND l.language = $2",
        )
        .bind(book)
        .bind(language)
        .execute(pool)
        .await?;
    }

    println!("[done] Linked books to authors, genres and languages");
    Ok(())
}

async fn seed_reader_activity(pool: &PgPool) -> anyhow::Result<()> {
    let count = table_count(pool, "reviews").await?;
    if count > 0 {
        println!("[skip] Reader activity already exists ({count} reviews)");
        return Ok(());
    }

    // (username, book title, rating, review)
    let reviews = [
        ("ada", "Dune", 4.5, "Sprawling and strange in the best way."),
        ("alan", "Foundation", 4.0, "Ideas first, characters second."),
        ("grace", "Kindred", 5.0, "Unflinching."),
        ("ada", "Nineteen Eighty-Four", 3.5, "Bleak but essential."),
    ];

    for (username, book, rating, body) in reviews {
        sqlx::query(
            "INSERT INTO reviews (rating, body, book_id, user_id)
             SELECT $1, $2, b.id, u.id FROM books b, users u WHERE b.title = $3 AND u.username = $4",
        )
        .bind(rating)
        .bind(body)
        .bind(book)
        .bind(username)
        .execute(pool)
        .await?;

        for table in ["read_lists", "buy_lists"] {
            sqlx::query(&format!(
                "INSERT INTO {table} (user_id, book_id)
                 SELECT u.id, b.id FROM users u, books b WHERE u.username = $1 AND b.title = $2
                 ON CONFLICT DO NOTHING"
            ))
            .bind(username)
            .bind(book)
            .execute(pool)
            .await?;
        }
    }

    let follows = [("ada", "Herbert"), ("alan", "Asimov"), ("grace", "Butler"), ("grace", "Le Guin")];
    for (username, author) in follows {
        sqlx::query(
            "INSERT INTO followers (user_id, author_id)
             SELECT u.id, a.id FROM users u, authors a WHERE u.username = $1 AND a.last_name = $2",
        )
        .bind(username)
        .bind(author)
        .execute(pool)
        .await?;
    }

    let requests = [
        ("alan", "The Dispossessed", "Ursula K. Le Guin"),
        ("grace", "Parable of the Sower", "Octavia E. Butler"),
    ];
    for (username, title, author) in requests {
        sqlx::query(
            "INSERT INTO request_books (book_title, author, requested_by)
             SELECT $1, $2, u.id FROM users u WHERE u.username = $3",
        )
        .bind(title)
        .bind(author)
        .bind(username)
        .execute(pool)
        .await?;
    }

    println!("[done] Created reviews, reading lists, follows and book requests");
    Ok(())
}
