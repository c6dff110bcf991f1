//! Generación simulada de insights de negocio.
//!
//! Flujo:
//!   1. Se muestrea un rating uniforme en [4.0, 5.0) redondeado a un decimal.
//!   2. Se muestrea un número de reseñas uniforme en [50, 500).
//!   3. Se elige una plantilla de titular al azar y se sustituyen sus
//!      marcadores `{name}`, `{location}`, `{rating}` y `{reviews}`.
//!
//! Todas las funciones son síncronas e infalibles: la latencia de red se
//! simula en la capa de la API, no aquí.

use chrono::Utc;
use rand::Rng;

use crate::models::{BusinessInsight, BusinessQuery};

/// Plantillas de titulares SEO (en inglés, como el producto).
/// El orden es fijo; la selección es un índice uniforme sobre la lista.
const HEADLINE_TEMPLATES: [&str; 8] = [
    "Top-Rated {name} in {location} - Trusted by {reviews}+ Happy Customers",
    "{name} - {location}'s Premier Choice with {rating}★ Rating",
    "Best {name} Experience in {location} - {reviews} Five-Star Reviews",
    "{name}: {location}'s Most Trusted Business Since Day One",
    "Premium {name} Services in {location} - Rated {rating}/5 Stars",
    "{name} - Leading {location} Business with Exceptional {rating}★ Rating",
    "Discover Why {name} is {location}'s #1 Choice - {reviews} Reviews",
    "{name}: Your Go-To {location} Destination for Excellence",
];

/// Genera un insight completo para una consulta válida (campos no vacíos
/// tras recortar; esa validación es responsabilidad del llamador).
pub fn generate_insight(query: &BusinessQuery) -> BusinessInsight {
    let rating = generate_rating();
    let reviews = generate_reviews();
    let headline = render_headline(&query.name, &query.location, rating, reviews);

    BusinessInsight {
        name: query.name.clone(),
        location: query.location.clone(),
        rating,
        reviews,
        headline,
        generated_at: Utc::now().to_rfc3339(),
    }
}

/// Rating uniforme en [4.0, 5.0) redondeado a un decimal.
/// El redondeo puede producir 5.0 (muestras en [4.95, 5.0)).
fn generate_rating() -> f64 {
    let raw: f64 = rand::thread_rng().gen_range(4.0..5.0);
    (raw * 10.0).round() / 10.0
}

/// Número de reseñas uniforme en [50, 500).
fn generate_reviews() -> u32 {
    rand::thread_rng().gen_range(50..500)
}

/// Elige una plantilla al azar y sustituye sus marcadores.
/// Solo se sustituye la PRIMERA aparición de cada marcador; las plantillas
/// actuales usan cada marcador como mucho una vez, así que una plantilla
/// futura que repita un marcador dejaría las apariciones restantes sin
/// sustituir.
pub fn render_headline(name: &str, location: &str, rating: f64, reviews: u32) -> String {
    let index = rand::thread_rng().gen_range(0..HEADLINE_TEMPLATES.len());
    let template = HEADLINE_TEMPLATES[index];

    template
        .replacen("{name}", name, 1)
        .replacen("{location}", location, 1)
        .replacen("{rating}", &rating.to_string(), 1)
        .replacen("{reviews}", &reviews.to_string(), 1)
}

/// Genera un titular nuevo para un insight ya existente, sin tocar su
/// rating ni sus reseñas. Idéntico a `render_headline`; existe como punto
/// de entrada propio porque se invoca en un momento distinto del ciclo.
pub fn regenerate_headline(name: &str, location: &str, rating: f64, reviews: u32) -> String {
    render_headline(name, location, rating, reviews)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_query() -> BusinessQuery {
        BusinessQuery {
            name: "Joe's Pizza".to_string(),
            location: "New York, NY".to_string(),
        }
    }

    #[test]
    fn rating_esta_en_rango_y_con_un_decimal() {
        for _ in 0..1000 {
            let rating = generate_rating();
            assert!((4.0..=5.0).contains(&rating), "rating fuera de rango: {rating}");
            // Un solo decimal: multiplicado por 10 debe ser entero.
            let scaled = rating * 10.0;
            assert!((scaled - scaled.round()).abs() < 1e-9, "rating con más de un decimal: {rating}");
        }
    }

    #[test]
    fn reviews_esta_en_rango() {
        for _ in 0..1000 {
            let reviews = generate_reviews();
            assert!((50..500).contains(&reviews), "reseñas fuera de rango: {reviews}");
        }
    }

    #[test]
    fn el_titular_no_contiene_marcadores_sin_sustituir() {
        // Se repite lo bastante como para pasar por todas las plantillas.
        for _ in 0..200 {
            let headline = render_headline("Joe's Pizza", "New York, NY", 4.5, 120);
            for token in ["{name}", "{location}", "{rating}", "{reviews}"] {
                assert!(!headline.contains(token), "marcador sin sustituir en: {headline}");
            }
        }
    }

    #[test]
    fn el_titular_incluye_nombre_y_ubicacion() {
        // Todas las plantillas contienen {name} y {location}.
        for _ in 0..200 {
            let headline = render_headline("Joe's Pizza", "New York, NY", 4.5, 120);
            assert!(headline.contains("Joe's Pizza"), "falta el nombre en: {headline}");
            assert!(headline.contains("New York, NY"), "falta la ubicación en: {headline}");
        }
    }

    #[test]
    fn el_titular_sale_de_una_plantilla_fija() {
        let headline = render_headline("Joe's Pizza", "New York, NY", 4.5, 120);
        let matches = HEADLINE_TEMPLATES.iter().any(|template| {
            template
                .replacen("{name}", "Joe's Pizza", 1)
                .replacen("{location}", "New York, NY", 1)
                .replacen("{rating}", "4.5", 1)
                .replacen("{reviews}", "120", 1)
                == headline
        });
        assert!(matches, "titular que no corresponde a ninguna plantilla: {headline}");
    }

    #[test]
    fn generate_insight_copia_la_consulta_y_respeta_rangos() {
        let insight = generate_insight(&sample_query());
        assert_eq!(insight.name, "Joe's Pizza");
        assert_eq!(insight.location, "New York, NY");
        assert!((4.0..=5.0).contains(&insight.rating));
        assert!((50..500).contains(&insight.reviews));
        assert!(!insight.headline.is_empty());
    }

    #[test]
    fn regenerar_no_depende_de_rating_ni_reviews_del_insight() {
        // El titular regenerado usa los valores que se le pasan tal cual;
        // el rating entero se muestra sin decimales (4 → "4").
        for _ in 0..200 {
            let headline = regenerate_headline("Cafetería Luna", "Madrid", 4.0, 99);
            if headline.contains("{") {
                panic!("marcador sin sustituir en: {headline}");
            }
            assert!(!headline.contains("4.0★"), "el rating entero no debe llevar decimal: {headline}");
        }
    }
}
