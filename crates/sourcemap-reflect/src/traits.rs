use crate::errors::ReflectionResult;
use crate::reflection::{
    ClassReflection, ConstantReflection, FunctionLike, FunctionReflection, MethodReflection,
    ParameterReflection, PropertyReflection,
};

/// Looks up declaration handles by name
///
/// This is the seam between descriptors and whatever knows about the declarations of a
/// program. Descriptors only ever call it when they are restored from their serialized form.
/// Every method fails with a not-found [`ReflectionError`](crate::ReflectionError) when the
/// declaration is missing.
///
/// Member lookups have default implementations built on [`Reflector::reflect_class`] and
/// [`Reflector::reflect_function`]; implementors only need to provide those two.
pub trait Reflector {
    /// Look up a class by its fully-qualified name
    fn reflect_class(&self, name: &str) -> ReflectionResult<ClassReflection>;

    /// Look up a free function by its fully-qualified name
    fn reflect_function(&self, name: &str) -> ReflectionResult<FunctionReflection>;

    fn reflect_method(&self, class: &str, method: &str) -> ReflectionResult<MethodReflection> {
        self.reflect_class(class)?.method(method)
    }

    fn reflect_property(&self, class: &str, property: &str) -> ReflectionResult<PropertyReflection> {
        self.reflect_class(class)?.property(property)
    }

    fn reflect_constant(&self, class: &str, constant: &str) -> ReflectionResult<ConstantReflection> {
        self.reflect_class(class)?.constant(constant)
    }

    /// Look up a parameter of a method (`class` is `Some`) or of a free function
    fn reflect_parameter(
        &self,
        class: Option<&str>,
        function: &str,
        parameter: &str,
    ) -> ReflectionResult<ParameterReflection> {
        let owner = match class {
            Some(class) => FunctionLike::Method(self.reflect_method(class, function)?),
            None => FunctionLike::Function(self.reflect_function(function)?),
        };

        owner.parameter(parameter)
    }
}
