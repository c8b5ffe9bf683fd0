use diesel::dsl;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::OptionalExtension;

use crate::models::{Dog, DogSummary};
use crate::repositories::PgPoolConn;
use crate::schema::{breeds, dogs};

type SummaryQuery = dsl::Order<
    dsl::Select<
        dsl::InnerJoin<dogs::table, breeds::table>,
        (dogs::id, dogs::name, breeds::name),
    >,
    dsl::Asc<dogs::id>,
>;

type WithBreedQuery = dsl::Select<
    dsl::Filter<dsl::InnerJoin<dogs::table, breeds::table>, dsl::Eq<dogs::id, i32>>,
    (dsl::AsSelect<Dog, Pg>, breeds::name),
>;

fn summary_query() -> SummaryQuery {
    dogs::table
        .inner_join(breeds::table)
        .select((dogs::id, dogs::name, breeds::name))
        .order(dogs::id.asc())
}

fn with_breed_query(dog_id: i32) -> WithBreedQuery {
    dogs::table
        .inner_join(breeds::table)
        .filter(dogs::id.eq(dog_id))
        .select((Dog::as_select(), breeds::name))
}

pub fn list_with_breed(conn: &mut PgPoolConn) -> Result<Vec<DogSummary>, diesel::result::Error> {
    summary_query().load::<DogSummary>(conn)
}

pub fn find_with_breed(
    conn: &mut PgPoolConn,
    dog_id: i32,
) -> Result<Option<(Dog, String)>, diesel::result::Error> {
    with_breed_query(dog_id)
        .first::<(Dog, String)>(conn)
        .optional()
}
