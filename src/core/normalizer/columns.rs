//! Column names of the FONASA cut file

pub const RUN: &str = "RUN";
pub const DV: &str = "DV";
pub const NOMBRES: &str = "NOMBRES";
pub const APELLIDO_PATERNO: &str = "APELLIDO_PATERNO";
pub const APELLIDO_MATERNO: &str = "APELLIDO_MATERNO";
pub const FECHA_NACIMIENTO: &str = "FECHA_NACIMIENTO";
pub const GENERO: &str = "GENERO";
pub const TRAMO: &str = "TRAMO";
pub const COD_CENTRO: &str = "COD_CENTRO";
pub const NOMBRE_CENTRO: &str = "NOMBRE_CENTRO";
pub const CODIGO_CENTRO_PROCEDENCIA: &str = "CODIGO_CENTRO_PROCEDENCIA";
pub const NOMBRE_CENTRO_PROCEDENCIA: &str = "NOMBRE_CENTRO_PROCEDENCIA";
pub const CODIGO_COMUNA_PROCEDENCIA: &str = "CODIGO_COMUNA_PROCEDENCIA";
pub const NOMBRE_COMUNA_PROCEDENCIA: &str = "NOMBRE_COMUNA_PROCEDENCIA";
pub const CODIGO_CENTRO_DESTINO: &str = "CODIGO_CENTRO_DESTINO";
pub const NOMBRE_CENTRO_DESTINO: &str = "NOMBRE_CENTRO_DESTINO";
pub const CODIGO_COMUNA_DESTINO: &str = "CODIGO_COMUNA_DESTINO";
pub const NOMBRE_COMUNA_DESTINO: &str = "NOMBRE_COMUNA_DESTINO";
pub const TRASLADO_POSITIVO: &str = "TRASLADO_POSITIVO";
pub const TRASLADO_NEGATIVO: &str = "TRASLADO_NEGATIVO";
pub const NUEVO_INSCRITO: &str = "NUEVO_INSCRITO";
pub const EXBLOQUEADO: &str = "EXBLOQUEADO";
pub const RECHAZADO_PREVISIONAL: &str = "RECHAZADO_PREVISIONAL";
pub const RECHAZADO_FALLECIDO: &str = "RECHAZADO_FALLECIDO";
pub const AUTORIZADO: &str = "AUTORIZADO";
pub const ACEPTADO_RECHAZADO: &str = "ACEPTADO_RECHAZADO";
pub const MOTIVO: &str = "MOTIVO";

/// Indicator columns holding a literal `X` or blank
pub const FLAG_COLUMNS: [&str; 7] = [
    TRASLADO_POSITIVO,
    TRASLADO_NEGATIVO,
    NUEVO_INSCRITO,
    EXBLOQUEADO,
    RECHAZADO_PREVISIONAL,
    RECHAZADO_FALLECIDO,
    AUTORIZADO,
];

/// Every column the normalizer reads, in file order
pub const EXPECTED_COLUMNS: [&str; 27] = [
    RUN,
    DV,
    NOMBRES,
    APELLIDO_PATERNO,
    APELLIDO_MATERNO,
    FECHA_NACIMIENTO,
    GENERO,
    TRAMO,
    COD_CENTRO,
    NOMBRE_CENTRO,
    CODIGO_CENTRO_PROCEDENCIA,
    NOMBRE_CENTRO_PROCEDENCIA,
    CODIGO_COMUNA_PROCEDENCIA,
    NOMBRE_COMUNA_PROCEDENCIA,
    CODIGO_CENTRO_DESTINO,
    NOMBRE_CENTRO_DESTINO,
    CODIGO_COMUNA_DESTINO,
    NOMBRE_COMUNA_DESTINO,
    TRASLADO_POSITIVO,
    TRASLADO_NEGATIVO,
    NUEVO_INSCRITO,
    EXBLOQUEADO,
    RECHAZADO_PREVISIONAL,
    RECHAZADO_FALLECIDO,
    AUTORIZADO,
    ACEPTADO_RECHAZADO,
    MOTIVO,
];
