//! Declaration constructors shared by the merge tests.

use smol_str::SmolStr;

use crate::base::SourceId;
use crate::decl::{
    AttributeDecl, BeanDecl, DeclPayload, EnumDecl, EnumValueDecl, ItemDecl, LocalDeclaration,
};

pub fn decl(
    name: &str,
    module: &str,
    is_custom: bool,
    payload: DeclPayload,
) -> LocalDeclaration {
    LocalDeclaration {
        name: name.into(),
        module: module.into(),
        source: SourceId::new(format!("{module}/{module}-items.xml")),
        position: 0,
        is_custom,
        payload,
    }
}

pub fn item_decl(name: &str, module: &str, is_custom: bool, item: ItemDecl) -> LocalDeclaration {
    decl(name, module, is_custom, DeclPayload::Item(item))
}

pub fn enum_decl(name: &str, module: &str, is_custom: bool, codes: &[&str]) -> LocalDeclaration {
    let values = codes
        .iter()
        .map(|code| EnumValueDecl {
            code: SmolStr::from(*code),
            description: None,
        })
        .collect();
    decl(
        name,
        module,
        is_custom,
        DeclPayload::Enum(EnumDecl {
            values,
            ..EnumDecl::default()
        }),
    )
}

pub fn bean_decl(name: &str, module: &str, is_custom: bool, bean: BeanDecl) -> LocalDeclaration {
    decl(name, module, is_custom, DeclPayload::Bean(bean))
}

pub fn attribute(qualifier: &str, value_type: &str) -> AttributeDecl {
    AttributeDecl {
        qualifier: qualifier.into(),
        value_type: Some(value_type.into()),
        ..AttributeDecl::default()
    }
}
