use diesel::prelude::*;

use crate::schema::breeds;

#[derive(Queryable, Selectable, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = breeds)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Breed {
    pub id: i32,
    pub name: String,
}
