use diesel::dsl;
use diesel::pg::Pg;
use diesel::prelude::*;

use crate::models::Breed;
use crate::repositories::PgPoolConn;
use crate::schema::breeds::dsl::*;

type ListQuery = dsl::Select<dsl::Order<breeds, dsl::Asc<id>>, dsl::AsSelect<Breed, Pg>>;

fn list_query() -> ListQuery {
    breeds.order(id.asc()).select(Breed::as_select())
}

pub fn list_all(conn: &mut PgPoolConn) -> Result<Vec<Breed>, diesel::result::Error> {
    list_query().load(conn)
}
