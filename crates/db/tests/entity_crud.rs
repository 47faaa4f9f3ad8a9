//! Integration tests for the catalogue repositories.
//!
//! Exercises the repository layer against a real SQLite database:
//! - Create / read / full-replace update / delete for every entity
//! - Filtering and page-number pagination of the movie list
//! - Foreign key violations

use assert_matches::assert_matches;
use cinema_core::pagination::pagination;
use cinema_db::models::director::{CreateDirector, UpdateDirector};
use cinema_db::models::genre::CreateGenre;
use cinema_db::models::movie::{CreateMovie, MovieQuery, UpdateMovie};
use cinema_db::repositories::{DirectorRepo, GenreRepo, MovieRepo};
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_director(name: &str) -> CreateDirector {
    CreateDirector {
        name: Some(name.to_string()),
    }
}

fn new_movie(title: &str, director_id: Option<i64>, genre_id: Option<i64>) -> CreateMovie {
    CreateMovie {
        title: Some(title.to_string()),
        director_id,
        genre_id,
        ..Default::default()
    }
}

async fn seed_titles(pool: &SqlitePool, titles: &[&str]) -> Vec<i64> {
    let mut ids = Vec::with_capacity(titles.len());
    for title in titles {
        let movie = MovieRepo::create(pool, &new_movie(title, None, None))
            .await
            .unwrap();
        ids.push(movie.id);
    }
    ids
}

fn titles(movies: &[cinema_db::models::movie::Movie]) -> Vec<&str> {
    movies.iter().filter_map(|m| m.title.as_deref()).collect()
}

// ---------------------------------------------------------------------------
// Movies
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_find_movie(pool: SqlitePool) {
    let director = DirectorRepo::create(&pool, &new_director("Sergio Leone"))
        .await
        .unwrap();

    let input = CreateMovie {
        title: Some("Once Upon a Time in the West".into()),
        description: Some("A mysterious stranger with a harmonica".into()),
        trailer: Some("https://example.com/trailer".into()),
        year: Some(1968),
        rating: Some(8.5),
        director_id: Some(director.id),
        genre_id: Some(9),
    };
    let created = MovieRepo::create(&pool, &input).await.unwrap();

    let found = MovieRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("movie should exist");
    assert_eq!(found, created);
    assert_eq!(found.year, Some(1968));
    assert_eq!(found.rating, Some(8.5));
    assert_eq!(found.director_id, Some(director.id));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_partial_create_stores_nulls(pool: SqlitePool) {
    let created = MovieRepo::create(&pool, &CreateMovie::default())
        .await
        .unwrap();

    assert_eq!(created.title, None);
    assert_eq!(created.year, None);
    assert_eq!(created.rating, None);
    assert_eq!(created.director_id, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_missing_movie_returns_none(pool: SqlitePool) {
    let found = MovieRepo::find_by_id(&pool, 999_999).await.unwrap();
    assert!(found.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_replaces_every_field(pool: SqlitePool) {
    let created = MovieRepo::create(
        &pool,
        &CreateMovie {
            title: Some("Draft".into()),
            description: Some("To be cleared".into()),
            year: Some(2001),
            rating: Some(6.0),
            genre_id: Some(1),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let updated = MovieRepo::update(
        &pool,
        created.id,
        &UpdateMovie {
            title: Some("Final".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .expect("movie should exist");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title.as_deref(), Some("Final"));
    assert_eq!(updated.description, None);
    assert_eq!(updated.year, None);
    assert_eq!(updated.rating, None);
    assert_eq!(updated.genre_id, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_movie_returns_none(pool: SqlitePool) {
    let result = MovieRepo::update(&pool, 999_999, &UpdateMovie::default())
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_movie(pool: SqlitePool) {
    let ids = seed_titles(&pool, &["Doomed"]).await;

    assert!(MovieRepo::delete(&pool, ids[0]).await.unwrap());
    assert!(MovieRepo::find_by_id(&pool, ids[0]).await.unwrap().is_none());
    assert!(!MovieRepo::delete(&pool, ids[0]).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_movie_with_unknown_director_violates_foreign_key(pool: SqlitePool) {
    let err = MovieRepo::create(&pool, &new_movie("Orphan", Some(424_242), None))
        .await
        .unwrap_err();

    assert_matches!(err, sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation());
}

// ---------------------------------------------------------------------------
// Movie list: pagination and filtering
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unbounded_list_returns_all_in_insertion_order(pool: SqlitePool) {
    seed_titles(&pool, &["M1", "M2", "M3"]).await;

    let movies = MovieRepo::list(&pool, &MovieQuery::all()).await.unwrap();
    assert_eq!(titles(&movies), ["M1", "M2", "M3"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_second_page_of_two(pool: SqlitePool) {
    seed_titles(&pool, &["M1", "M2", "M3", "M4", "M5"]).await;

    let query = pagination(MovieQuery::all(), 2, 2);
    let movies = MovieRepo::list(&pool, &query).await.unwrap();
    assert_eq!(titles(&movies), ["M3", "M4"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_every_page_matches_unpaginated_slice(pool: SqlitePool) {
    seed_titles(&pool, &["A", "B", "C", "D", "E", "F", "G"]).await;
    let all = MovieRepo::list(&pool, &MovieQuery::all()).await.unwrap();

    for page_size in 1..=8_i64 {
        for page in 1..=9_i64 {
            let query = pagination(MovieQuery::all(), page, page_size);
            let movies = MovieRepo::list(&pool, &query).await.unwrap();

            let start = ((page - 1) * page_size) as usize;
            let end = (start + page_size as usize).min(all.len());
            let expected = if start < all.len() {
                &all[start..end]
            } else {
                &[][..]
            };
            assert!(movies.len() as i64 <= page_size);
            assert_eq!(movies, expected, "page {page}, page_size {page_size}");
        }
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_page_past_end_is_empty(pool: SqlitePool) {
    seed_titles(&pool, &["M1", "M2"]).await;

    let query = pagination(MovieQuery::all(), 5, 10);
    let movies = MovieRepo::list(&pool, &query).await.unwrap();
    assert!(movies.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_filters_are_combined_with_and(pool: SqlitePool) {
    let nolan = DirectorRepo::create(&pool, &new_director("Nolan")).await.unwrap();
    let villeneuve = DirectorRepo::create(&pool, &new_director("Villeneuve"))
        .await
        .unwrap();
    let sci_fi = GenreRepo::create(&pool, &CreateGenre { name: Some("Space".into()) })
        .await
        .unwrap();
    let drama = GenreRepo::create(&pool, &CreateGenre { name: Some("Slow".into()) })
        .await
        .unwrap();

    for (title, director, genre) in [
        ("Interstellar", nolan.id, sci_fi.id),
        ("Memento", nolan.id, drama.id),
        ("Arrival", villeneuve.id, sci_fi.id),
        ("Tenet", nolan.id, sci_fi.id),
    ] {
        MovieRepo::create(&pool, &new_movie(title, Some(director), Some(genre)))
            .await
            .unwrap();
    }

    let by_director = MovieRepo::list(&pool, &MovieQuery::all().director(nolan.id))
        .await
        .unwrap();
    assert_eq!(titles(&by_director), ["Interstellar", "Memento", "Tenet"]);

    let by_genre = MovieRepo::list(&pool, &MovieQuery::all().genre(sci_fi.id))
        .await
        .unwrap();
    assert_eq!(titles(&by_genre), ["Interstellar", "Arrival", "Tenet"]);

    let both = MovieRepo::list(
        &pool,
        &MovieQuery::all().director(nolan.id).genre(sci_fi.id),
    )
    .await
    .unwrap();
    assert_eq!(titles(&both), ["Interstellar", "Tenet"]);
    assert!(both
        .iter()
        .all(|m| m.director_id == Some(nolan.id) && m.genre_id == Some(sci_fi.id)));

    let paged = MovieRepo::list(
        &pool,
        &pagination(MovieQuery::all().director(nolan.id).genre(sci_fi.id), 2, 1),
    )
    .await
    .unwrap();
    assert_eq!(titles(&paged), ["Tenet"]);
}

// ---------------------------------------------------------------------------
// Directors
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_director_crud(pool: SqlitePool) {
    let created = DirectorRepo::create(&pool, &new_director("Agnès Varda"))
        .await
        .unwrap();
    assert_eq!(created.name.as_deref(), Some("Agnès Varda"));

    let listed = DirectorRepo::list(&pool).await.unwrap();
    assert_eq!(listed, vec![created.clone()]);

    let updated = DirectorRepo::update(&pool, created.id, &UpdateDirector::default())
        .await
        .unwrap()
        .expect("director should exist");
    assert_eq!(updated.name, None);

    assert!(DirectorRepo::delete(&pool, created.id).await.unwrap());
    assert!(DirectorRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_director_returns_none(pool: SqlitePool) {
    let result = DirectorRepo::update(&pool, 999_999, &UpdateDirector::default())
        .await
        .unwrap();
    assert!(result.is_none());
    assert!(!DirectorRepo::delete(&pool, 999_999).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_referenced_director_violates_foreign_key(pool: SqlitePool) {
    let director = DirectorRepo::create(&pool, &new_director("Kubrick"))
        .await
        .unwrap();
    MovieRepo::create(&pool, &new_movie("2001", Some(director.id), None))
        .await
        .unwrap();

    let err = DirectorRepo::delete(&pool, director.id).await.unwrap_err();
    assert_matches!(err, sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation());
}

// ---------------------------------------------------------------------------
// Genres
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_seeded_genres_are_listed(pool: SqlitePool) {
    let genres = GenreRepo::list(&pool).await.unwrap();
    assert!(!genres.is_empty());
    assert_eq!(genres[0].id, 1);
    assert_eq!(genres[0].name.as_deref(), Some("Comedy"));

    let found = GenreRepo::find_by_id(&pool, 1).await.unwrap();
    assert_eq!(found.as_ref(), genres.first());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_genre(pool: SqlitePool) {
    let created = GenreRepo::create(&pool, &CreateGenre { name: Some("Noir".into()) })
        .await
        .unwrap();
    let found = GenreRepo::find_by_id(&pool, created.id).await.unwrap();
    assert_eq!(found, Some(created));
}
