#[cfg(test)]
mod tests {
    use crate::database::entity::{post, post_tag, tag};
    use crate::database::postgres_repo::{PostgresPostRepository, PostgresTagRepository};
    use blog_core::domain::{DateOrder, NewPost, Post, PostFilter};
    use blog_core::error::RepoError;
    use blog_core::ports::{BaseRepository, PostRepository, TagRepository};
    use chrono::{TimeZone, Utc};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Transaction, Value};

    const SELECT_POSTS: &str = r#"SELECT "posts"."id", "posts"."title", "posts"."body", "posts"."published", "posts"."publication_date" FROM "posts""#;

    fn post_model(id: i32, title: &str, day: u32, published: bool) -> post::Model {
        post::Model {
            id,
            title: title.to_owned(),
            body: "Body".to_owned(),
            published,
            publication_date: Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap().into(),
        }
    }

    #[tokio::test]
    async fn test_find_post_by_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![post_model(1, "Test Post", 1, true)]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result: Option<Post> = repo.find_by_id(1).await.unwrap();

        let post = result.expect("post should exist");
        assert_eq!(post.title, "Test Post");
        assert_eq!(post.id, 1);
        assert!(post.published);
    }

    #[tokio::test]
    async fn test_find_missing_post() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<post::Model>::new()])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result: Option<Post> = repo.find_by_id(42).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_find_filtered_joins_tag_and_filters_published() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                post_model(2, "Second", 2, true),
                post_model(1, "First", 1, true),
            ]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);
        let filter = PostFilter::new(Some("rust".into()), true, DateOrder::Desc);

        let posts = repo.find_filtered(&filter).await.unwrap();

        let titles: Vec<_> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Second", "First"]);

        assert_eq!(
            repo.db.into_transaction_log(),
            vec![Transaction::from_sql_and_values(
                DatabaseBackend::Postgres,
                &format!(
                    r#"{SELECT_POSTS} INNER JOIN "post_tags" ON "posts"."id" = "post_tags"."post_id" INNER JOIN "tags" ON "post_tags"."tag_id" = "tags"."id" WHERE "tags"."name" = $1 AND "posts"."published" = $2 ORDER BY "posts"."publication_date" DESC, "posts"."id" ASC"#
                ),
                [Value::from("rust"), Value::from(true)],
            )]
        );
    }

    #[tokio::test]
    async fn test_find_filtered_without_tag_skips_join() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![
                Vec::<post::Model>::new(),
                Vec::<post::Model>::new(),
            ])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        repo.find_filtered(&PostFilter::new(None, false, DateOrder::Asc))
            .await
            .unwrap();
        // An empty tag name is the same as no tag.
        repo.find_filtered(&PostFilter::new(Some(String::new()), false, DateOrder::Asc))
            .await
            .unwrap();

        let expected = || {
            Transaction::from_sql_and_values(
                DatabaseBackend::Postgres,
                &format!(r#"{SELECT_POSTS} ORDER BY "posts"."publication_date" ASC, "posts"."id" ASC"#),
                Vec::<Value>::new(),
            )
        };
        assert_eq!(repo.db.into_transaction_log(), vec![expected(), expected()]);
    }

    #[tokio::test]
    async fn test_attach_existing_link_is_unchanged() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![post_tag::Model {
                post_id: 1,
                tag_id: 2,
            }]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        assert!(!repo.attach_tag(1, 2).await.unwrap());
        // Only the lookup ran, no insert.
        assert_eq!(repo.db.into_transaction_log().len(), 1);
    }

    #[tokio::test]
    async fn test_attach_new_link() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<post_tag::Model>::new()])
            .append_query_results(vec![vec![post_tag::Model {
                post_id: 1,
                tag_id: 2,
            }]])
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        assert!(repo.attach_tag(1, 2).await.unwrap());
    }

    #[tokio::test]
    async fn test_save_missing_post_is_not_found() {
        // UPDATE ... RETURNING yields no row.
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<post::Model>::new()])
            .into_connection();

        let repo = PostgresPostRepository::new(db);
        let post: Post = post_model(7, "Gone", 1, true).into();

        let result = BaseRepository::<Post, i32>::save(&repo, post).await;
        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_find_all() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                post_model(1, "A", 1, false),
                post_model(2, "B", 2, true),
            ]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        assert_eq!(repo.find_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_insert_returns_generated_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![post_model(9, "Fresh", 3, false)]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);
        let new_post = NewPost {
            title: "Fresh".into(),
            body: "Body".into(),
            published: false,
            publication_date: Utc.with_ymd_and_hms(2024, 1, 3, 0, 0, 0).unwrap(),
        };

        let post = repo.insert(new_post).await.unwrap();
        assert_eq!(post.id, 9);
        assert_eq!(post.title, "Fresh");
    }

    #[tokio::test]
    async fn test_delete_missing_post() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result = BaseRepository::<Post, i32>::delete(&repo, 5).await;
        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_find_tag_by_name() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![tag::Model {
                id: 3,
                name: "rust".to_owned(),
            }]])
            .into_connection();

        let repo = PostgresTagRepository::new(db);

        let tag = repo.find_by_name("rust").await.unwrap().expect("tag exists");
        assert_eq!(tag.id, 3);
        assert_eq!(tag.name, "rust");
    }
}
