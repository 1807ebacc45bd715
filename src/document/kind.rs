//! The closed catalog of element kinds.
//!
//! Every tag the exporter can emit is one `ElementKind`. The kind carries the
//! data the generic element and serializer need: tag name, layout capability
//! and the attribute names it accepts.

/// How an element's content is laid out when serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Holds child elements, each on its own indented line.
    Block,
    /// Holds at most a text value, always written on a single line.
    Inline,
    /// Holds multi-line text whose rows are indented one step deeper.
    Matrix,
    /// Holds a numeric payload streamed as one tuple per line.
    Array,
}

impl Layout {
    /// Whether child elements are allowed.
    pub fn accepts_children(self) -> bool {
        self == Layout::Block
    }

    /// Whether inline text is allowed.
    pub fn accepts_text(self) -> bool {
        self != Layout::Block
    }
}

const ID_NAME: &[&str] = &["id", "name"];
const PRIMITIVE: &[&str] = &["count", "material"];
const SID: &[&str] = &["sid"];
const NONE: &[&str] = &[];

/// Every COLLADA 1.3.1 element kind known to the factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Collada,
    Scene,
    Node,
    BoundingBox,
    Camera,
    Optics,
    Imager,
    Instance,
    Library,
    Animation,
    Channel,
    Sampler,
    Controller,
    Skin,
    Combiner,
    Joints,
    Geometry,
    Mesh,
    Lines,
    Linestrips,
    Polygons,
    P,
    Triangles,
    Trifans,
    Tristrips,
    Vertices,
    Source,
    Accessor,
    Array,
    BoolArray,
    FloatArray,
    IntArray,
    NameArray,
    Input,
    Material,
    Shader,
    Pass,
    Technique,
    Image,
    Light,
    Texture,
    Program,
    Code,
    Entry,
    Param,
    Matrix,
    LookAt,
    Perspective,
    Rotate,
    Scale,
    Skew,
    Translate,
    Asset,
    Author,
    AuthoringTool,
    Created,
    Modified,
    Revision,
    SourceData,
    Copyright,
    Title,
    Subject,
    Keywords,
    Comments,
    Unit,
    UpAxis,
    Extra,
}

impl ElementKind {
    /// The XML tag name.
    pub fn tag(self) -> &'static str {
        use ElementKind::*;
        match self {
            Collada => "COLLADA",
            Scene => "scene",
            Node => "node",
            BoundingBox => "boundingbox",
            Camera => "camera",
            Optics => "optics",
            Imager => "imager",
            Instance => "instance",
            Library => "library",
            Animation => "animation",
            Channel => "channel",
            Sampler => "sampler",
            Controller => "controller",
            Skin => "skin",
            Combiner => "combiner",
            Joints => "joints",
            Geometry => "geometry",
            Mesh => "mesh",
            Lines => "lines",
            Linestrips => "linestrips",
            Polygons => "polygons",
            P => "p",
            Triangles => "triangles",
            Trifans => "trifans",
            Tristrips => "tristrips",
            Vertices => "vertices",
            Source => "source",
            Accessor => "accessor",
            Array => "array",
            BoolArray => "bool_array",
            FloatArray => "float_array",
            IntArray => "int_array",
            NameArray => "Name_array",
            Input => "input",
            Material => "material",
            Shader => "shader",
            Pass => "pass",
            Technique => "technique",
            Image => "image",
            Light => "light",
            Texture => "texture",
            Program => "program",
            Code => "code",
            Entry => "entry",
            Param => "param",
            Matrix => "matrix",
            LookAt => "lookat",
            Perspective => "perspective",
            Rotate => "rotate",
            Scale => "scale",
            Skew => "skew",
            Translate => "translate",
            Asset => "asset",
            Author => "author",
            AuthoringTool => "authoring_tool",
            Created => "created",
            Modified => "modified",
            Revision => "revision",
            SourceData => "source_data",
            Copyright => "copyright",
            Title => "title",
            Subject => "subject",
            Keywords => "keywords",
            Comments => "comments",
            Unit => "unit",
            UpAxis => "up_axis",
            Extra => "extra",
        }
    }

    /// The content layout this kind is serialized with.
    pub fn layout(self) -> Layout {
        use ElementKind::*;
        match self {
            FloatArray => Layout::Array,
            Matrix => Layout::Matrix,
            P | Array | BoolArray | IntArray | NameArray | Code | Param | LookAt
            | Perspective | Rotate | Scale | Skew | Translate | Author | AuthoringTool
            | Created | Modified | Revision | SourceData | Copyright | Title | Subject
            | Keywords | Comments | Unit | UpAxis => Layout::Inline,
            _ => Layout::Block,
        }
    }

    /// Attribute names this kind accepts.
    pub fn attributes(self) -> &'static [&'static str] {
        use ElementKind::*;
        match self {
            Collada => &["version", "xmlns", "xml:base"],
            Scene | Camera | Animation | Sampler | Skin | Geometry | Mesh | Source
            | Material | Shader | Texture => ID_NAME,
            Node => &["id", "name", "type"],
            Instance => &["url"],
            Library => &["id", "name", "type"],
            Channel => &["id", "name", "source", "target"],
            Controller => &["id", "name", "target"],
            Combiner => &["count"],
            Lines | Linestrips | Polygons | Triangles | Trifans | Tristrips => PRIMITIVE,
            Vertices => &["id", "name", "count"],
            Accessor => &["count", "id", "offset", "source", "stride"],
            Array => &["count", "id", "name", "type"],
            BoolArray | NameArray => &["count", "id", "name"],
            FloatArray => &["count", "id", "name", "digits", "magnitude"],
            IntArray => &["count", "id", "name", "minInclusive", "maxInclusive"],
            Input => &["idx", "semantic", "source"],
            Technique => &["profile"],
            Image => &["id", "name", "height", "width", "depth", "source", "format"],
            Light => &["id", "name", "type"],
            Program => &["id", "name", "url"],
            Code => &["id", "lang", "profile", "semantic"],
            Entry => &["function", "semantic"],
            Param => &["id", "name", "type", "flow", "semantic", "sid"],
            Matrix | LookAt | Perspective | Rotate | Scale | Skew | Translate => SID,
            Unit => &["name", "meter"],
            BoundingBox | Optics | Imager | Joints | P | Pass | Asset | Author
            | AuthoringTool | Created | Modified | Revision | SourceData | Copyright
            | Title | Subject | Keywords | Comments | UpAxis | Extra => NONE,
        }
    }

    /// Look up the static spelling of an attribute name in this kind's schema.
    pub fn schema_name(self, name: &str) -> Option<&'static str> {
        self.attributes().iter().copied().find(|a| *a == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layouts() {
        assert_eq!(ElementKind::Node.layout(), Layout::Block);
        assert_eq!(ElementKind::Param.layout(), Layout::Inline);
        assert_eq!(ElementKind::Translate.layout(), Layout::Inline);
        assert_eq!(ElementKind::Matrix.layout(), Layout::Matrix);
        assert_eq!(ElementKind::FloatArray.layout(), Layout::Array);
        assert!(Layout::Block.accepts_children());
        assert!(!Layout::Array.accepts_children());
        assert!(!Layout::Block.accepts_text());
    }

    #[test]
    fn test_schema_lookup() {
        assert_eq!(ElementKind::Accessor.schema_name("stride"), Some("stride"));
        assert_eq!(ElementKind::Accessor.schema_name("url"), None);
        assert!(ElementKind::UpAxis.attributes().is_empty());
        assert_eq!(ElementKind::NameArray.tag(), "Name_array");
    }
}
