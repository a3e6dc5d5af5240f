//! Client facade.

use onlyworlds_domain::{
    Ability, Character, Collective, Construct, Creature, ElementType, Event, Family, Institution,
    Language, Law, Location, Map, Marker, Narrative, Object, Phenomenon, Pin, Relation, Species,
    Title, Trait, Zone,
};

use crate::config::Config;
use crate::resource::Resource;
use crate::tokens::TokenResource;
use crate::transport::Transport;
use crate::world::WorldResource;

/// Entry point to the service.
///
/// One client per credential pair; cloning shares the underlying HTTP
/// connection pool. Resource accessors are cheap handles and can be created
/// per call site.
#[derive(Clone)]
pub struct Client {
    transport: Transport,
}

impl Client {
    pub fn new(config: Config) -> Self {
        Self {
            transport: Transport::new(&config),
        }
    }

    /// CRUD access to an arbitrary element family with caller-chosen typing.
    ///
    /// The typed accessors below are the usual entry points; this one exists
    /// for generic code that works over [`ElementType`] values, e.g. with
    /// `serde_json::Value` as `T`.
    pub fn resource<T>(&self, element: ElementType) -> Resource<T>
    where
        T: serde::Serialize + serde::de::DeserializeOwned,
    {
        Resource::new(self.transport.clone(), element)
    }

    pub fn abilities(&self) -> Resource<Ability> {
        self.resource(ElementType::Ability)
    }

    pub fn characters(&self) -> Resource<Character> {
        self.resource(ElementType::Character)
    }

    pub fn collectives(&self) -> Resource<Collective> {
        self.resource(ElementType::Collective)
    }

    pub fn constructs(&self) -> Resource<Construct> {
        self.resource(ElementType::Construct)
    }

    pub fn creatures(&self) -> Resource<Creature> {
        self.resource(ElementType::Creature)
    }

    pub fn events(&self) -> Resource<Event> {
        self.resource(ElementType::Event)
    }

    pub fn families(&self) -> Resource<Family> {
        self.resource(ElementType::Family)
    }

    pub fn institutions(&self) -> Resource<Institution> {
        self.resource(ElementType::Institution)
    }

    pub fn languages(&self) -> Resource<Language> {
        self.resource(ElementType::Language)
    }

    pub fn laws(&self) -> Resource<Law> {
        self.resource(ElementType::Law)
    }

    pub fn locations(&self) -> Resource<Location> {
        self.resource(ElementType::Location)
    }

    pub fn maps(&self) -> Resource<Map> {
        self.resource(ElementType::Map)
    }

    pub fn markers(&self) -> Resource<Marker> {
        self.resource(ElementType::Marker)
    }

    pub fn narratives(&self) -> Resource<Narrative> {
        self.resource(ElementType::Narrative)
    }

    pub fn objects(&self) -> Resource<Object> {
        self.resource(ElementType::Object)
    }

    pub fn phenomena(&self) -> Resource<Phenomenon> {
        self.resource(ElementType::Phenomenon)
    }

    pub fn pins(&self) -> Resource<Pin> {
        self.resource(ElementType::Pin)
    }

    pub fn relations(&self) -> Resource<Relation> {
        self.resource(ElementType::Relation)
    }

    pub fn species(&self) -> Resource<Species> {
        self.resource(ElementType::Species)
    }

    pub fn titles(&self) -> Resource<Title> {
        self.resource(ElementType::Title)
    }

    pub fn traits(&self) -> Resource<Trait> {
        self.resource(ElementType::Trait)
    }

    pub fn zones(&self) -> Resource<Zone> {
        self.resource(ElementType::Zone)
    }

    /// The single world behind the configured API key.
    pub fn world(&self) -> WorldResource {
        WorldResource::new(self.transport.clone())
    }

    /// Token rating endpoints.
    pub fn tokens(&self) -> TokenResource {
        TokenResource::new(self.transport.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_typed_accessors_target_their_family() {
        let client = Client::new(Config::new("key", "pin"));
        assert_eq!(client.characters().element_type(), ElementType::Character);
        assert_eq!(client.phenomena().element_type(), ElementType::Phenomenon);
        assert_eq!(client.traits().element_type(), ElementType::Trait);
    }

    #[test]
    fn test_untyped_resource_is_available() {
        let client = Client::new(Config::new("key", "pin"));
        let resource = client.resource::<Value>(ElementType::Zone);
        assert_eq!(resource.element_type(), ElementType::Zone);
    }
}
