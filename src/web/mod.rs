// src/web/mod.rs
pub mod aluno_handlers;
pub mod curso_handlers;
pub mod health_handlers;
pub mod matricula_handlers;
pub mod routes;

#[cfg(test)]
pub(crate) mod testutils;
