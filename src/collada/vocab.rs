//! Closed vocabularies of the COLLADA 1.3.1 common profile.
//!
//! Each enumeration maps its variants to the exact wire spelling through a
//! single table, so the order of `ALL` and `NAMES` must match.

use std::fmt;

macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        pub enum $name:ident { $($variant:ident => $wire:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every variant in table order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];
            const NAMES: &'static [&'static str] = &[$($wire),+];

            /// The wire spelling.
            pub fn as_str(self) -> &'static str {
                Self::NAMES[self as usize]
            }

            /// Parse a wire spelling.
            pub fn from_wire(s: &str) -> Option<Self> {
                Self::NAMES
                    .iter()
                    .position(|n| *n == s)
                    .map(|i| Self::ALL[i])
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

vocabulary! {
    /// Technique profiles.
    pub enum Profile {
        Common => "COMMON",
        Blender => "BLENDER",
    }
}

vocabulary! {
    /// Common-profile parameter names.
    pub enum ParamName {
        A => "A",
        Ambient => "AMBIENT",
        Angle => "ANGLE",
        Attenuation => "ATTENUATION",
        AttenuationScale => "ATTENUATION_SCALE",
        B => "B",
        Bottom => "BOTTOM",
        Color => "COLOR",
        Diffuse => "DIFFUSE",
        Emission => "EMISSION",
        Falloff => "FALLOFF",
        FalloffScale => "FALLOFF_SCALE",
        G => "G",
        Left => "LEFT",
        P => "P",
        Q => "Q",
        R => "R",
        Reflective => "REFLECTIVE",
        Reflectivity => "REFLECTIVITY",
        Right => "RIGHT",
        S => "S",
        Shininess => "SHININESS",
        Specular => "SPECULAR",
        T => "T",
        TangentX => "TANGENT.X",
        TangentY => "TANGENT.Y",
        TangentZ => "TANGENT.Z",
        Time => "TIME",
        Top => "TOP",
        Transparency => "TRANSPARENCY",
        Transparent => "TRANSPARENT",
        U => "U",
        V => "V",
        W => "W",
        X => "X",
        XFov => "XFOV",
        Y => "Y",
        YFov => "YFOV",
        Z => "Z",
        ZFar => "ZFAR",
        ZNear => "ZNEAR",
    }
}

vocabulary! {
    /// Program ids and urls: shading models, projections, interpolators.
    pub enum ProgramId {
        AngleMap => "ANGLE_MAP",
        Bezier => "BEZIER",
        Bspline => "BSPLINE",
        Cardinal => "CARDINAL",
        Constant => "CONSTANT",
        CubeMap => "CUBE_MAP",
        FishEye => "FISH_EYE",
        Hermite => "HERMITE",
        Lambert => "LAMBERT",
        Linear => "LINEAR",
        Orthographic => "ORTHOGRAPHIC",
        Panorama => "PANORAMA",
        Perspective => "PERSPECTIVE",
        Phong => "PHONG",
        RearFishEye => "REAR_FISH_EYE",
        Spherical => "SPHERICAL",
    }
}

vocabulary! {
    /// Semantics of `<code>` and `<entry>`.
    pub enum CodeSemantic {
        FragmentProgram => "FRAGMENT_PROGRAM",
        VertexProgram => "VERTEX_PROGRAM",
    }
}

vocabulary! {
    /// Input semantics.
    pub enum InputSemantic {
        BindShapeNormal => "BIND_SHAPE_NORMAL",
        BindShapePosition => "BIND_SHAPE_POSITION",
        Binormal => "BINORMAL",
        Color => "COLOR",
        Image => "IMAGE",
        Input => "INPUT",
        InTangent => "IN_TANGENT",
        Interpolation => "INTERPOLATION",
        InvBindMatrix => "INV_BIND_MATRIX",
        Joint => "JOINT",
        JointsAndWeights => "JOINTS_AND_WEIGHTS",
        Normal => "NORMAL",
        Output => "OUTPUT",
        OutTangent => "OUT_TANGENT",
        Position => "POSITION",
        Tangent => "TANGENT",
        Texcoord => "TEXCOORD",
        Texture => "TEXTURE",
        Uv => "UV",
        Vertex => "VERTEX",
        Weight => "WEIGHT",
    }
}

vocabulary! {
    /// Library container kinds.
    pub enum LibraryType {
        Animation => "ANIMATION",
        Camera => "CAMERA",
        Code => "CODE",
        Controller => "CONTROLLER",
        Geometry => "GEOMETRY",
        Image => "IMAGE",
        Light => "LIGHT",
        Material => "MATERIAL",
        Program => "PROGRAM",
        Texture => "TEXTURE",
    }
}

vocabulary! {
    /// Parameter flow direction.
    pub enum Flow {
        In => "IN",
        Out => "OUT",
        InOut => "INOUT",
    }
}

vocabulary! {
    /// Scene node types.
    pub enum NodeType {
        Node => "NODE",
        Joint => "JOINT",
    }
}

vocabulary! {
    /// Light types.
    pub enum LightType {
        Ambient => "AMBIENT",
        Directional => "DIRECTIONAL",
        Point => "POINT",
        Spot => "SPOT",
    }
}
