//! Modelos de dominio (consulta de negocio e insight generado).

use serde::Serialize;

/// Datos que el usuario introduce en el formulario.
/// El llamador garantiza que ambos campos son no vacíos tras recortar
/// espacios; una vez construida, la consulta es inmutable.
#[derive(Debug, Clone)]
pub struct BusinessQuery {
    pub name: String,
    pub location: String,
}

/// Insight generado para una consulta de negocio.
/// `rating` y `reviews` se fijan en la primera generación y no cambian
/// durante la vida del insight; `headline` es el único campo que muta
/// al regenerar el titular.
#[derive(Debug, Clone, Serialize)]
pub struct BusinessInsight {
    pub name: String,
    pub location: String,
    /// Valoración con un decimal, en el rango [4.0, 5.0].
    pub rating: f64,
    /// Número de reseñas, en el rango [50, 500).
    pub reviews: u32,
    pub headline: String,
    /// Marca de tiempo UTC (RFC 3339) de la primera generación.
    pub generated_at: String,
}
