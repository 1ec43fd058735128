use rowbind::Mapper;
use tests::{
    models::{Tweet, TweetById, TweetByUserAndMinRetweets, TweetByUserId, User},
    setup,
};

use pretty_assertions::assert_eq;

#[tokio::test]
async fn query() {
    let mut conn = setup();
    let mapper = Mapper::new();

    let users: Vec<User> = mapper
        .all(&mut conn, "select * from users order by name", &())
        .await
        .unwrap();

    assert_eq!(users.len(), 2);
    assert!(users.iter().all(|user| user.id > 0));

    let names: Vec<_> = users.iter().map(|user| user.name.as_str()).collect();
    assert_eq!(names, ["Oliver", "Sandra"]);
}

#[tokio::test]
async fn query_with_projections() {
    let mut conn = setup();
    let mapper = Mapper::new();

    let users: Vec<User> = mapper
        .all(&mut conn, "select id,name from users order by name", &())
        .await
        .unwrap();

    assert_eq!(users.len(), 2);
    assert!(users.iter().all(|user| user.id > 0));
    assert!(users.iter().all(|user| user.karma.is_none()));
}

#[tokio::test]
async fn query_without_rows() {
    let mut conn = setup();
    let mapper = Mapper::new();

    let users: Vec<User> = mapper
        .all(&mut conn, "select * from users where id < 0", &())
        .await
        .unwrap();

    assert!(users.is_empty());
}

#[tokio::test]
async fn query_by_id() {
    let mut conn = setup();
    let mapper = Mapper::new();

    let tweets: Vec<Tweet> = mapper
        .all(
            &mut conn,
            "select * from tweets where id=:id",
            &TweetById { id: 3 },
        )
        .await
        .unwrap();

    assert_eq!(tweets.len(), 1);
    assert_eq!(tweets[0].user_id, 2);
    assert_eq!(tweets[0].message, "Holidays! Yay!");
    assert!(!tweets[0].created.is_empty());
}

#[tokio::test]
async fn query_by_user_id() {
    let mut conn = setup();
    let mapper = Mapper::new();

    let tweets: Vec<Tweet> = mapper
        .all(
            &mut conn,
            "select * from tweets where user_id=:user_id order by id",
            &TweetByUserId { user_id: 1 },
        )
        .await
        .unwrap();

    let retweets: Vec<_> = tweets.iter().map(|tweet| tweet.retweets).collect();
    assert_eq!(retweets, [179, 19]);
}

#[tokio::test]
async fn query_with_several_parameters() {
    let mut conn = setup();
    let mapper = Mapper::new();

    let params = TweetByUserAndMinRetweets {
        user_id: 1,
        num_retweets: 100,
    };
    let tweets: Vec<Tweet> = mapper
        .all(
            &mut conn,
            "select * from tweets where user_id=:user_id and retweets>=:num_retweets",
            &params,
        )
        .await
        .unwrap();

    assert_eq!(tweets.len(), 1);
    assert_eq!(tweets[0].message, "Google Go rocks");

    let statements = conn.statements();
    assert_eq!(
        statements[0].sql,
        "select * from tweets where user_id=?1 and retweets>=?2"
    );
}

#[tokio::test]
async fn query_unknown_parameter_does_not_execute() {
    let mut conn = setup();
    let mapper = Mapper::new();

    let err = mapper
        .all::<_, _, User>(
            &mut conn,
            "select * from users where id=:Bogus",
            &TweetById { id: 1 },
        )
        .await
        .unwrap_err();

    assert!(err.is_unknown_parameter());
    assert!(conn.statements().is_empty());
}

#[tokio::test]
async fn query_leaves_string_literals_alone() {
    let mut conn = setup();
    let mapper = Mapper::new();

    let users: Vec<User> = mapper
        .all(
            &mut conn,
            "select id, name || ':suffix' as name from users where id=:id",
            &TweetById { id: 2 },
        )
        .await
        .unwrap();

    assert_eq!(users[0].name, "Sandra:suffix");
}

#[tokio::test]
async fn query_binds_after_commented_apostrophe() {
    let mut conn = setup();
    let mapper = Mapper::new();

    let users: Vec<User> = mapper
        .all(
            &mut conn,
            "select * from users -- the user's row\nwhere id=:id",
            &TweetById { id: 2 },
        )
        .await
        .unwrap();

    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name, "Sandra");
    assert_eq!(
        conn.statements()[0].sql,
        "select * from users -- the user's row\nwhere id=?1"
    );
}
