// src/services/mod.rs
pub mod aluno_service;
pub mod curso_service;
pub mod matricula_service;
