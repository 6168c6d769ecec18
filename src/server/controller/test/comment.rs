use super::*;

fn comment_uri(title_id: i32, review_id: i32, comment_id: i32) -> String {
    format!(
        "/v1/titles/{}/review/{}/comment/{}/",
        title_id, review_id, comment_id
    )
}

/// Tests commenting on a review through a title it does not belong to.
///
/// Expected: 404 and no comment stored
#[tokio::test]
async fn rejects_comment_under_other_title() {
    let app = TestApp::new().await;
    let (_author, title, review) = factory::helpers::create_review_with_dependencies(app.db())
        .await
        .unwrap();
    let other_title = factory::create_title(app.db()).await.unwrap();
    let commenter = factory::create_user(app.db()).await.unwrap();
    let token = app.token_for(&commenter);

    let (status, _) = app
        .post(
            &format!("/v1/titles/{}/review/{}/comment/", other_title.id, review.id),
            Some(&token),
            json!({"text": "Misplaced."}),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = app
        .get(
            &format!("/v1/titles/{}/review/{}/comment/", title.id, review.id),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 0);
}

/// Tests retrieving a comment through a title that does not own its review.
///
/// Expected: 404
#[tokio::test]
async fn retrieve_under_other_title_is_not_found() {
    let app = TestApp::new().await;
    let (_author, _title, review, comment) =
        factory::helpers::create_comment_with_dependencies(app.db())
            .await
            .unwrap();
    let other_title = factory::create_title(app.db()).await.unwrap();

    let (status, _) = app
        .get(&comment_uri(other_title.id, review.id, comment.id), None)
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// Tests editing someone else's comment as a regular user.
///
/// Expected: 403 and the text unchanged
#[tokio::test]
async fn rejects_edit_by_non_author() {
    let app = TestApp::new().await;
    let (_author, title, review, comment) =
        factory::helpers::create_comment_with_dependencies(app.db())
            .await
            .unwrap();
    let stranger = factory::create_user(app.db()).await.unwrap();
    let token = app.token_for(&stranger);
    let uri = comment_uri(title.id, review.id, comment.id);

    let (status, _) = app
        .patch(&uri, Some(&token), json!({"text": "Hijacked"}))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = app.get(&uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["text"], comment.text);
}

/// Tests editing a comment as its author.
///
/// Expected: 200 with the new text
#[tokio::test]
async fn author_edits_own_comment() {
    let app = TestApp::new().await;
    let (author, title, review, comment) =
        factory::helpers::create_comment_with_dependencies(app.db())
            .await
            .unwrap();
    let token = app.token_for(&author);

    let (status, body) = app
        .patch(
            &comment_uri(title.id, review.id, comment.id),
            Some(&token),
            json!({"text": "Reworded."}),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["text"], "Reworded.");
}

/// Tests deleting someone else's comment as a moderator.
///
/// Expected: 204
#[tokio::test]
async fn moderator_deletes_comment() {
    let app = TestApp::new().await;
    let (_author, title, review, comment) =
        factory::helpers::create_comment_with_dependencies(app.db())
            .await
            .unwrap();
    let moderator = factory::user::create_user_with_role(app.db(), entity::user::Role::Moderator)
        .await
        .unwrap();
    let token = app.token_for(&moderator);

    let (status, _) = app
        .delete(&comment_uri(title.id, review.id, comment.id), Some(&token))
        .await;

    assert_eq!(status, StatusCode::NO_CONTENT);
}
