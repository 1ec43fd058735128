//! Record types for the seeded `users` and `tweets` tables.

use rowbind::Model;

#[derive(Debug, Default, Clone, PartialEq, Model)]
pub struct User {
    #[rowbind("id,primarykey,serial")]
    pub id: i64,

    #[rowbind("name")]
    pub name: String,

    #[rowbind("karma")]
    pub karma: Option<f64>,

    #[rowbind("suspended")]
    pub suspended: bool,
}

#[derive(Debug, Default, Clone, PartialEq, Model)]
pub struct Tweet {
    #[rowbind("id,primarykey,serial")]
    pub id: i64,

    #[rowbind("user_id")]
    pub user_id: i64,

    #[rowbind("message")]
    pub message: String,

    #[rowbind("retweets")]
    pub retweets: i64,

    #[rowbind("created")]
    pub created: String,
}

#[derive(Debug, Default, Model)]
pub struct TweetById {
    pub id: i64,
}

#[derive(Debug, Default, Model)]
pub struct TweetByUserId {
    pub user_id: i64,
}

#[derive(Debug, Default, Model)]
pub struct TweetByUserAndMinRetweets {
    pub user_id: i64,
    pub num_retweets: i64,
}

#[allow(non_snake_case)]
#[derive(Debug, Default, Model)]
pub struct SampleQuery {
    #[rowbind("id,primarykey,autoincrement")]
    pub Id: i64,

    #[rowbind("-")]
    pub Ignore: String,

    pub UserId: i64,
}

/// Key fields without an explicit column default to the lower-cased field name.
#[allow(non_snake_case)]
#[derive(Debug, Default, Model)]
pub struct DefaultColumns {
    #[rowbind(",primarykey,autoincrement")]
    pub Id: i64,

    pub UserId: i64,
}
