use sea_query::Iden;

#[derive(Iden, Clone, Copy)]
pub enum Questions {
    Table,
    Id,
    Question,
    Answer,
    Category,
    Difficulty,
}
